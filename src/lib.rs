pub mod configuration;

pub mod distribution {
    pub mod boundeddistribution;
    pub mod distributionerror;
    pub mod uniformdistribution;
    pub mod boundedstudentt;
}

pub mod math {
    pub mod function {
        pub mod function;
        pub mod interval;
        pub mod constantfunction;
        pub mod linearfunction;
        pub mod compositefunction;
    }
}

pub mod temporalevent {
    pub mod temporaleventerror;
    pub mod relationprobabilities;
    pub mod relationformula;
    pub mod trapeziumrelationformula;
    pub mod temporalevent;
    pub mod temporaleventtrapezium;
    pub mod randomevents;
}

pub mod time {
    pub mod unixtime;
    pub mod timeinterval;
}

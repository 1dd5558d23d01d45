pub mod application {
    pub mod completion {
        pub mod generate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod completion {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod generate;
        }
    }
}

pub mod application {
    pub mod filter {
        pub mod compute_view;
    }
    pub mod product {
        pub mod add;
        pub mod clear_bought;
        pub mod delete;
        pub mod get_all;
        pub mod toggle_bought;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notification;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
    }
    pub mod filter {
        pub mod fuzzy;
        pub mod matcher;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod compute_view;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
            pub mod clear_bought;
            pub mod delete;
            pub mod get_all;
            pub mod toggle_bought;
        }
    }
}

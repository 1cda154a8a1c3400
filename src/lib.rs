pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod integrand {
        pub mod integrand;
        pub mod inversequarticroot;
        pub mod integrandkind;
    }

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod quadraturerule;
        pub mod gausslegendre;
        pub mod compositeevaluator;
        pub mod integrationoptions;
        pub mod integrationresult;
        pub mod integrationrequest;
        pub mod convergencedriver;
    }
}

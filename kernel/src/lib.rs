pub use crate::error::*;

mod auth;
mod directory;
mod entity;
mod error;
mod failure;
mod modify;
mod query;
mod validation;
mod wizard;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod wizard {
        pub use crate::wizard::*;
    }
    pub mod failure {
        pub use crate::failure::*;
        pub use crate::validation::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod auth {
        pub use crate::auth::*;
    }
    pub mod directory {
        pub use crate::directory::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}

pub mod routes;

pub use routes::KnxRouter;

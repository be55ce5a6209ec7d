pub mod profile;


pub use profile::configure_profile_routes;

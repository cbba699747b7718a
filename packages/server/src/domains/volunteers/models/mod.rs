pub mod volunteer;

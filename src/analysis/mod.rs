pub mod form;
pub mod history;
pub mod identity;
pub mod predictor;
pub mod profile;
pub mod random;
pub mod report;
pub mod situational;
pub mod team;
pub mod venue;

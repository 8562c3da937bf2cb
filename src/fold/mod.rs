pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod observer;
pub(crate) mod state;

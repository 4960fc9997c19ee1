pub mod form;
pub mod promotion;
pub mod results;

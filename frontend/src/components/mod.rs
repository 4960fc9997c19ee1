pub mod promotions;

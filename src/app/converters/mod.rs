pub mod nbconvert;

pub use nbconvert::NbconvertConverter;

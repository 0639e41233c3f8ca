pub mod a001_product;
pub mod a002_faq;
pub mod a003_theme;
pub mod a004_animation;
pub mod a005_payroll;

pub mod badge;
pub mod form_field;

pub use badge::{ActiveBadge, Badge, BadgeVariant, OrderStatusBadge};
pub use form_field::{SelectField, TextField};

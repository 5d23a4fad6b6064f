pub mod add;
pub mod cafes;
pub mod delete;
pub mod health;
pub mod home;
pub mod price;
pub mod search;
pub mod validation;

pub use add::{add_cafe_form, create_cafe};
pub use cafes::list_cafes;
pub use delete::report_closed;
pub use health::health_check;
pub use home::home;
pub use price::{edit_price_form, update_price};
pub use search::{search_cafes, search_form};

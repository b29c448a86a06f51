pub mod dynamic;
pub mod field;
pub mod group;
pub mod plan;
pub mod prefs;
pub mod schema;

pub use dynamic::DynamicField;
pub use field::{FieldConfig, FieldConfigMap, FieldType};
pub use group::FieldGroup;
pub use plan::{Binding, FormField, FormPlan, FormTab, SelectOption, Widget};
pub use prefs::ColumnPrefs;
pub use schema::{FormSchema, ModalOptions};

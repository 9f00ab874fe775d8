use crate::domain::entities::{ClosetFilters, Condition, SortField};
use anyhow::Result;

/// Shared closet state. Toggle mutators flip the stored flag rather than
/// assigning it.
pub trait ClosetStore: Send + Sync {
    fn current_filters(&self) -> ClosetFilters;
    fn set_category_filter(&self, category: &str) -> Result<()>;
    fn set_brand_filter(&self, brand: &str) -> Result<()>;
    fn set_condition_filter(&self, condition: Condition) -> Result<()>;
    fn toggle_show_only_favorited(&self) -> Result<()>;
    fn toggle_show_only_on_sale(&self) -> Result<()>;
    fn toggle_show_only_in_outfits(&self) -> Result<()>;
    fn set_sorting(&self, field: SortField, ascending: bool) -> Result<()>;
}

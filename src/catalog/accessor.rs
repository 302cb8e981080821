use super::catalog_manager::CatalogManager;
use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::AttrDesc;

/// Attribute metadata lookups needed to interpret record bytes.
pub trait CatalogAccessor {
    /// Descriptor of `attribute` in `relation`.
    fn get_attribute(&self, relation: &str, attribute: &str) -> Result<AttrDesc, CatalogError>;

    /// All attributes of `relation`, in physical order.
    fn get_relation_attributes(&self, relation: &str) -> Result<Vec<AttrDesc>, CatalogError>;
}

impl CatalogAccessor for CatalogManager {
    fn get_attribute(&self, relation: &str, attribute: &str) -> Result<AttrDesc, CatalogError> {
        self.relation(relation)?
            .attr(attribute)
            .cloned()
            .ok_or_else(|| CatalogError::AttributeNotFound {
                relation: relation.to_string(),
                attribute: attribute.to_string(),
            })
    }

    fn get_relation_attributes(&self, relation: &str) -> Result<Vec<AttrDesc>, CatalogError> {
        Ok(self.relation(relation)?.attrs.clone())
    }
}

//! Listing query composition.
//!
//! `build_query` turns a requester plus UI filter state into the ordered
//! predicate list consumed by `DocumentStore::list`. The access term is
//! mandatory and always first; it is the sole access-control gate for
//! listing, so nothing downstream may drop or reorder it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{FileCategory, Requester};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Parsed `"<field>-<asc|desc>"` sort specification.
///
/// The field name is passed through unvalidated; a field the backend
/// cannot sort on surfaces as a backend error at call time. The *shape*
/// is validated strictly: a missing separator, empty field, or unknown
/// direction fails fast with `InvalidInput` before any backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(spec: &str) -> Result<SortSpec, AppError> {
        // Split on the last separator so field names containing '-' survive.
        let (field, direction) = spec.rsplit_once('-').ok_or_else(|| {
            AppError::InvalidInput(format!(
                "malformed sort specification '{}': expected <field>-<asc|desc>",
                spec
            ))
        })?;
        if field.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "malformed sort specification '{}': empty field name",
                spec
            )));
        }
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "malformed sort specification '{}': unknown direction '{}'",
                    spec, other
                )))
            }
        };
        Ok(SortSpec {
            field: field.to_string(),
            direction,
        })
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            field: "lastModified".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// One opaque query term for the document store's listing call.
///
/// A predicate list is immutable once built and consumed once.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// owner == owner_id OR sharedWith contains email. The listing gate.
    AccessibleBy { owner_id: Uuid, email: String },
    /// owner == owner_id only; used by the usage path.
    OwnedBy(Uuid),
    CategoryIn(Vec<FileCategory>),
    NameContains(String),
    OrderBy {
        field: String,
        direction: SortDirection,
    },
    Limit(u32),
}

/// Compose the predicate list for a listing on behalf of `requester`.
///
/// An empty `sort` string means [`crate::constants::DEFAULT_SORT`].
/// Emission order: access filter, category filter, search filter, sort,
/// limit.
pub fn build_query(
    requester: &Requester,
    categories: &[FileCategory],
    search_text: &str,
    sort: &str,
    limit: Option<u32>,
) -> Result<Vec<Predicate>, AppError> {
    let sort = if sort.is_empty() {
        SortSpec::default()
    } else {
        SortSpec::parse(sort)?
    };

    let mut query = vec![Predicate::AccessibleBy {
        owner_id: requester.id,
        email: requester.email.clone(),
    }];
    if !categories.is_empty() {
        query.push(Predicate::CategoryIn(categories.to_vec()));
    }
    if !search_text.is_empty() {
        query.push(Predicate::NameContains(search_text.to_string()));
    }
    query.push(Predicate::OrderBy {
        field: sort.field,
        direction: sort.direction,
    });
    if let Some(limit) = limit {
        if limit > 0 {
            query.push(Predicate::Limit(limit));
        }
    }
    Ok(query)
}

//! Column/Action Model
//!
//! Declarative table columns, recomputed from the resolved profile.

use std::fmt;
use std::str::FromStr;

use crate::config::ColumnLabels;
use crate::error::BoardError;
use crate::profile::UserProfile;

/// ViewRow field a column reads its value or class from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    ProductName,
    UnitPrice,
    TotalPrice,
    Quantity,
    Stock,
    QuantityStyle,
    StockWarning,
    DeleteStyle,
}

/// Row-level actions dispatched from button cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Delete,
    ViewProduct,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Delete => "delete",
            RowAction::ViewProduct => "viewProduct",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowAction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(RowAction::Delete),
            "viewProduct" => Ok(RowAction::ViewProduct),
            other => Err(BoardError::UnknownAction(other.to_string())),
        }
    }
}

/// How a cell renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Currency,
    Number,
    IconButton { icon_name: &'static str, variant: &'static str },
    Button { variant: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub label: String,
    /// Data field shown in the cell; `None` for action columns
    pub field: Option<RowField>,
    pub kind: CellKind,
    /// Field supplying the cell's conditional class
    pub class_field: Option<RowField>,
    pub action: Option<RowAction>,
    pub fixed_width: Option<u32>,
}

impl ColumnDescriptor {
    fn data(label: &str, field: RowField, kind: CellKind) -> Self {
        Self {
            label: label.to_string(),
            field: Some(field),
            kind,
            class_field: None,
            action: None,
            fixed_width: None,
        }
    }

    fn styled(mut self, class_field: RowField) -> Self {
        self.class_field = Some(class_field);
        self
    }
}

/// Columns visible to `profile`. The view-product column requires the
/// administrator profile exactly.
pub fn columns_for(profile: &UserProfile, labels: &ColumnLabels) -> Vec<ColumnDescriptor> {
    let mut columns = vec![
        ColumnDescriptor::data(&labels.product_name, RowField::ProductName, CellKind::Text),
        ColumnDescriptor::data(&labels.unit_price, RowField::UnitPrice, CellKind::Currency),
        ColumnDescriptor::data(&labels.total_price, RowField::TotalPrice, CellKind::Currency),
        ColumnDescriptor::data(&labels.quantity, RowField::Quantity, CellKind::Number)
            .styled(RowField::QuantityStyle),
        ColumnDescriptor::data(&labels.stock, RowField::Stock, CellKind::Number)
            .styled(RowField::StockWarning),
        ColumnDescriptor {
            label: labels.delete.clone(),
            field: None,
            kind: CellKind::IconButton {
                icon_name: "utility:delete",
                variant: "bare",
            },
            class_field: Some(RowField::DeleteStyle),
            action: Some(RowAction::Delete),
            fixed_width: Some(40),
        },
    ];

    if profile.can_view_product() {
        columns.push(ColumnDescriptor {
            label: labels.view_product.clone(),
            field: None,
            kind: CellKind::Button { variant: "brand" },
            class_field: None,
            action: Some(RowAction::ViewProduct),
            fixed_width: None,
        });
    }

    columns
}

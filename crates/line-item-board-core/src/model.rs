//! Line Item Model
//!
//! Source records as returned by the fetch endpoint, the view rows derived from
//! them, and the aggregate overstock banner.

use serde::{Deserialize, Serialize};

use crate::config::RowStyles;

/// Opportunity line item as stored by the org (field names match the wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItemRecord {
    pub id: String,
    #[serde(default)]
    pub opportunity_id: Option<String>,
    #[serde(default)]
    pub product2_id: Option<String>,
    #[serde(default)]
    pub product2: Option<ProductSummary>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub quantity: f64,
}

/// The linked product's fields carried on a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "QuantityInStock__c", alias = "QuantityInStock")]
    pub quantity_in_stock: Option<f64>,
}

/// One rendered table row. Rebuilt on every load, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: f64,
    pub total_price: f64,
    pub quantity: f64,
    /// `None` when the product carries no stock value
    pub stock: Option<f64>,
    pub quantity_style: String,
    pub stock_warning: String,
    pub delete_style: String,
}

/// Value shown in a data cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Decimal(Option<f64>),
}

impl ViewRow {
    pub fn from_record(record: &LineItemRecord, styles: &RowStyles) -> Self {
        let product = record.product2.as_ref();
        let stock = product.and_then(|p| p.quantity_in_stock);
        let is_overstock = matches!(stock, Some(stock) if record.quantity > stock);

        Self {
            id: record.id.clone(),
            product_id: record.product2_id.clone().unwrap_or_default(),
            product_name: product.map(|p| p.name.clone()).unwrap_or_default(),
            unit_price: record.unit_price,
            total_price: record.total_price,
            quantity: record.quantity,
            stock,
            quantity_style: if is_overstock {
                styles.quantity_overstock.clone()
            } else {
                styles.quantity_ok.clone()
            },
            stock_warning: if is_overstock { styles.stock_warning.clone() } else { String::new() },
            delete_style: if is_overstock { styles.delete_warning.clone() } else { String::new() },
        }
    }

    /// Requested quantity exceeds the product's stock
    pub fn is_overstock(&self) -> bool {
        matches!(self.stock, Some(stock) if self.quantity > stock)
    }

    pub fn cell(&self, field: crate::RowField) -> CellValue {
        use crate::RowField;

        match field {
            RowField::ProductName => CellValue::Text(self.product_name.clone()),
            RowField::UnitPrice => CellValue::Decimal(Some(self.unit_price)),
            RowField::TotalPrice => CellValue::Decimal(Some(self.total_price)),
            RowField::Quantity => CellValue::Decimal(Some(self.quantity)),
            RowField::Stock => CellValue::Decimal(self.stock),
            RowField::QuantityStyle => CellValue::Text(self.quantity_style.clone()),
            RowField::StockWarning => CellValue::Text(self.stock_warning.clone()),
            RowField::DeleteStyle => CellValue::Text(self.delete_style.clone()),
        }
    }

    /// Class string held by one of the style fields; empty for data fields
    pub fn class_of(&self, field: crate::RowField) -> &str {
        use crate::RowField;

        match field {
            RowField::QuantityStyle => &self.quantity_style,
            RowField::StockWarning => &self.stock_warning,
            RowField::DeleteStyle => &self.delete_style,
            _ => "",
        }
    }
}

/// Map fetched records to view rows, keeping fetch order
pub fn build_rows(records: &[LineItemRecord], styles: &RowStyles) -> Vec<ViewRow> {
    records.iter().map(|r| ViewRow::from_record(r, styles)).collect()
}

/// Persistent warning shown above the table while any row is overstocked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBanner {
    pub has_error: bool,
    pub message: String,
}

impl ErrorBanner {
    pub fn from_rows(rows: &[ViewRow], warning: &str) -> Self {
        let has_error = rows
            .iter()
            .any(|row| matches!(row.stock, Some(stock) if stock < row.quantity));

        Self {
            has_error,
            message: if has_error { warning.to_string() } else { String::new() },
        }
    }
}

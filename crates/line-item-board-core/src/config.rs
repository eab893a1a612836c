//! Board Configuration
//!
//! Labels, notification texts, style classes and the privileged profile
//! names. Every field has a default so a partial JSON document (or none at
//! all) yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::profile::{SALES_PROFILE, SYSTEM_ADMINISTRATOR};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub labels: ColumnLabels,
    pub messages: Messages,
    pub styles: RowStyles,
    pub profiles: ProfileRules,
}

/// Column header and button labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnLabels {
    pub product_name: String,
    pub unit_price: String,
    pub total_price: String,
    pub quantity: String,
    pub stock: String,
    pub delete: String,
    pub view_product: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            product_name: "Nom du produit".to_string(),
            unit_price: "Prix unitaire".to_string(),
            total_price: "Prix total".to_string(),
            quantity: "Quantité".to_string(),
            stock: "Quantité restante".to_string(),
            delete: "Supprimer".to_string(),
            view_product: "Voir produit".to_string(),
        }
    }
}

/// Notification and banner texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub success_title: String,
    pub deleted: String,
    pub error_title: String,
    pub overstock_warning: String,
    pub confirm_title: String,
    pub confirm_body: String,
    pub confirm: String,
    pub cancel: String,
    pub empty: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success_title: "Succès".to_string(),
            deleted: "Produit supprimé.".to_string(),
            error_title: "Erreur".to_string(),
            overstock_warning: "⚠️ Vous avez au moins une ligne avec un problème de quantité. \
                Veuillez supprimer cette ligne ou réduire sa quantité. Si vous avez absolument \
                besoin de plus de produits, veuillez contacter votre administrateur système."
                .to_string(),
            confirm_title: "Confirmer la suppression".to_string(),
            confirm_body: "Voulez-vous vraiment supprimer ce produit de l'opportunité ?".to_string(),
            confirm: "Supprimer".to_string(),
            cancel: "Annuler".to_string(),
            empty: "Aucun produit sur cette opportunité.".to_string(),
        }
    }
}

/// CSS classes applied to overstocked and regular rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowStyles {
    pub quantity_ok: String,
    pub quantity_overstock: String,
    pub stock_warning: String,
    pub delete_warning: String,
}

impl Default for RowStyles {
    fn default() -> Self {
        Self {
            quantity_ok: "slds-text-color_success slds-text-title_bold".to_string(),
            quantity_overstock: "slds-text-color_error slds-text-title_bold".to_string(),
            stock_warning: "slds-theme_warning".to_string(),
            delete_warning: "slds-theme_warning".to_string(),
        }
    }
}

/// Profile display names granting board privileges. Names match exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRules {
    /// Only this profile sees the view-product column
    pub administrator: String,
    pub admin_or_commercial: Vec<String>,
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            administrator: SYSTEM_ADMINISTRATOR.to_string(),
            admin_or_commercial: vec![SYSTEM_ADMINISTRATOR.to_string(), SALES_PROFILE.to_string()],
        }
    }
}

impl ProfileRules {
    pub fn is_administrator(&self, name: &str) -> bool {
        self.administrator == name
    }

    pub fn is_admin_or_commercial(&self, name: &str) -> bool {
        self.admin_or_commercial.iter().any(|p| p == name)
    }
}

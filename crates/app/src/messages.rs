//! User-facing message catalog.
//!
//! Every string a customer or provider can read (push notifications, error
//! bodies and success confirmations) lives here. The defaults are the Indonesian texts the mobile apps
//! ship with; a JSON file can override any subset of them.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::orders::journey::OrderStatus;

#[derive(Debug, Error)]
pub enum MessagesError {
    #[error("failed to read message catalog")]
    Read(#[source] io::Error),

    #[error("failed to parse message catalog")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub notifications: NotificationMessages,
    pub errors: ErrorMessages,
    pub success: SuccessMessages,
}

impl Messages {
    /// Load a catalog from a JSON file, falling back to defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MessagesError> {
        let raw = fs::read_to_string(path).map_err(MessagesError::Read)?;

        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON for the catalog.
    pub fn from_json(raw: &str) -> Result<Self, MessagesError> {
        serde_json::from_str(raw).map_err(MessagesError::Parse)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationMessages {
    /// Sent to a provider when a customer places an order with them.
    pub new_order: String,

    /// Sent to a provider when the customer cancels.
    pub order_canceled: String,

    /// Sent to a customer when the provider moves the order along.
    pub customer_status: CustomerStatusMessages,
}

impl Default for NotificationMessages {
    fn default() -> Self {
        Self {
            new_order: "Anda mendapatkan pesanan baru.".to_string(),
            order_canceled: "Pesanan dibatalkan.".to_string(),
            customer_status: CustomerStatusMessages::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerStatusMessages {
    pub waiting_confirmation: String,
    pub confirmed: String,
    pub on_the_way: String,
    pub reached_destination: String,
    pub working: String,
    pub complete: String,
    pub paid: String,
    pub canceled: String,
}

impl CustomerStatusMessages {
    #[must_use]
    pub fn for_status(&self, status: OrderStatus) -> &str {
        match status {
            OrderStatus::WaitingConfirmation => &self.waiting_confirmation,
            OrderStatus::Confirmed => &self.confirmed,
            OrderStatus::OnTheWay => &self.on_the_way,
            OrderStatus::ReachedDestination => &self.reached_destination,
            OrderStatus::Working => &self.working,
            OrderStatus::Complete => &self.complete,
            OrderStatus::Paid => &self.paid,
            OrderStatus::Canceled => &self.canceled,
        }
    }
}

impl Default for CustomerStatusMessages {
    fn default() -> Self {
        Self {
            waiting_confirmation: "Pesanan menunggu konfirmasi.".to_string(),
            confirmed:
                "Pesanan anda telah diterima. Penyedia jasa akan segera menuju lokasi Anda."
                    .to_string(),
            on_the_way: "Penyedia jasa sedang menuju lokasi Anda.".to_string(),
            reached_destination: "Penyedia jasa telah tiba dilokasi Anda.".to_string(),
            working: "Pekerjaan dimulai.".to_string(),
            complete: "Pekerjaan selesai.".to_string(),
            paid: "Pesanan telah selesai. Terima kasih telah menggunakan jasa Kami. Semoga \
                   pelayanan kami memuaskan Anda. Jika Anda berkenan, mohon berikan penilaian \
                   Anda ketika menggunakan layanan Kami."
                .to_string(),
            canceled: "Pesanan ditolak.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub missing_token: String,
    pub invalid_token: String,
    pub expired_token: String,
    pub account_not_found: String,
    pub account_exists: String,
    pub provider_unavailable: String,
    pub customer_unknown: String,
    pub empty_order: String,
    pub invalid_order: String,
    pub order_already_canceled: String,
    pub tracking_not_found: String,
    pub rating_exists: String,
    pub rating_not_found: String,
    pub invalid_request: String,
    pub request_failed: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            missing_token: "Unauthorize request. Please check your header request, and make \
                            sure include Authorization token in your request."
                .to_string(),
            invalid_token: "Unauthorize request. Invalid auth token.".to_string(),
            expired_token: "Expired API token".to_string(),
            account_not_found: "Account not found".to_string(),
            account_exists: "Account already exists".to_string(),
            provider_unavailable: "Penyedia Jasa tidak terdaftar atau tidak aktif".to_string(),
            customer_unknown: "User tidak terdaftar".to_string(),
            empty_order: "Pesanan harus memiliki minimal satu layanan".to_string(),
            invalid_order: "Invalid order".to_string(),
            order_already_canceled: "This order was canceled".to_string(),
            tracking_not_found: "Record not found".to_string(),
            rating_exists: "Only can give rating once".to_string(),
            rating_not_found: "Rating not found".to_string(),
            invalid_request: "Invalid request".to_string(),
            request_failed: "Request failed".to_string(),
        }
    }
}

/// Confirmations returned by endpoints that have nothing else to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessMessages {
    pub order_created: String,
    pub order_canceled: String,
    pub device_token_updated: String,
    pub profile_updated: String,
}

impl Default for SuccessMessages {
    fn default() -> Self {
        Self {
            order_created: "Success order".to_string(),
            order_canceled: "Order is cancel".to_string(),
            device_token_updated: "Device token updated".to_string(),
            profile_updated: "Success update data".to_string(),
        }
    }
}

use serde::Serialize;

use crate::error::AppError;

/// Sale lifecycle of a showtime.
///
/// Stored as an integer code in the `show_time` table; the intended
/// progression is not-started, open, then sold or closed, then played or
/// canceled. `MoviePlayed` and `ShowCanceled` are terminal. Nothing here
/// transitions into `TicketsSold`; that is left to a collaborator watching
/// seat counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum SaleStatus {
    SaleNotStarted,
    SaleOpen,
    TicketsSold,
    SaleClosed,
    MoviePlayed,
    ShowCanceled,
}

impl SaleStatus {
    pub fn as_code(self) -> i32 {
        match self {
            SaleStatus::SaleNotStarted => 1,
            SaleStatus::SaleOpen => 2,
            SaleStatus::TicketsSold => 3,
            SaleStatus::SaleClosed => 4,
            SaleStatus::MoviePlayed => 5,
            SaleStatus::ShowCanceled => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(SaleStatus::SaleNotStarted),
            2 => Some(SaleStatus::SaleOpen),
            3 => Some(SaleStatus::TicketsSold),
            4 => Some(SaleStatus::SaleClosed),
            5 => Some(SaleStatus::MoviePlayed),
            6 => Some(SaleStatus::ShowCanceled),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SaleStatus::SaleNotStarted => "sale not started",
            SaleStatus::SaleOpen => "selling tickets",
            SaleStatus::TicketsSold => "tickets sold out",
            SaleStatus::SaleClosed => "sale closed",
            SaleStatus::MoviePlayed => "movie played",
            SaleStatus::ShowCanceled => "show canceled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SaleStatus::MoviePlayed | SaleStatus::ShowCanceled)
    }

    /// Next status after opening ticket sale.
    ///
    /// Only legal from `SaleNotStarted`; anything further along means the
    /// caller already opened it once.
    pub fn open_sale(self) -> Result<Self, AppError> {
        match self {
            SaleStatus::SaleNotStarted => Ok(SaleStatus::SaleOpen),
            _ => Err(AppError::InvalidTransition("sale already started")),
        }
    }

    /// Next status after closing ticket sale.
    ///
    /// Only legal from `SaleOpen`. A showtime sitting at `TicketsSold`
    /// cannot be closed through this; it stays there until expired.
    pub fn close_sale(self) -> Result<Self, AppError> {
        match self {
            SaleStatus::SaleOpen => Ok(SaleStatus::SaleClosed),
            _ => Err(AppError::InvalidTransition("sale not open")),
        }
    }

    /// Next status after the showtime expires, as canceled or played.
    /// Legal from any non-terminal status.
    pub fn expire(self, canceled: bool) -> Result<Self, AppError> {
        if self.is_terminal() {
            return Err(AppError::InvalidTransition("show already expired"));
        }
        Ok(if canceled { SaleStatus::ShowCanceled } else { SaleStatus::MoviePlayed })
    }
}

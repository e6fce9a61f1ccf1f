//! boletolib — контрольные цифры, штрихкод и «linha digitável» для бразильских boleto (FEBRABAN)

pub mod amount;
pub mod barcode;
pub mod checksum;
pub mod due_factor;
pub mod error;
pub mod format;
pub mod identifier;
pub mod lines;
pub mod model;
pub mod printable;
pub mod traits;
pub mod typing_line;

pub use amount::Amount;
pub use barcode::Barcode;
pub use error::{BoletoError, Result};
pub use model::{Payee, Payer, SlipRecord};
pub use printable::PrintableSlip;
pub use traits::{BankStrategy, FieldWidths};
pub use typing_line::TypingLine;

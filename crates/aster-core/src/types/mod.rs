pub mod account;
pub mod envelope;
pub mod memo;
pub mod operation;

pub use account::AccountId;
pub use envelope::{Envelope, TxBody, MAX_SIGNATURES};
pub use memo::{Memo, MAX_MEMO_TEXT_BYTES};
pub use operation::{Asset, Operation, Price, MAX_ASSET_CODE_BYTES};

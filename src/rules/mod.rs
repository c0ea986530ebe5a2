//! Game rules that do not depend on turn order.
//!
//! - `status`: masking raw cards into the views participants may see
//! - `scoring`: row clearing, table scores and the winner tie-break

pub mod scoring;
pub mod status;

pub use scoring::{clear_completed_rows, row_is_complete, table_score, winning_index};
pub use status::{build_status, CardView, MaskedTable, Status, HIDDEN_TOKEN};

pub mod auction;
pub mod call;
pub mod card;
pub mod contract;
pub mod deal;
pub mod hand;
pub mod rank;
pub mod seat;
pub mod strain;
pub mod suit;

pub use auction::Auction;
pub use call::Call;
pub use card::Card;
pub use contract::{Contract, DoubleStatus};
pub use deal::Deal;
pub use hand::{Hand, SuitQuality};
pub use rank::Rank;
pub use seat::{Partnership, Seat, Vulnerability};
pub use strain::Strain;
pub use suit::Suit;

//! Content identifier parsing for gateway retrieval.
//!
//! Turns caller input into a validated [`ContentId`] before anything touches
//! the network.
//!
//! # Identifier Shapes
//!
//! - **V0**: base58btc, `Qm` prefix, exactly 46 characters
//! - **V1**: lowercase base32 (`a-z2-7`), `b` prefix, 59 to [`MAX_CID_LEN`] characters
//!
//! # Example
//!
//! ```
//! use ipfetch_cid::{ContentId, CidVersion};
//!
//! let cid = ContentId::from_input("ipfs://QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/readme").unwrap();
//! assert_eq!(cid.version(), CidVersion::V0);
//! assert_eq!(cid.as_str(), "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
//! ```

pub use self::cid::{CidVersion, ContentId, MAX_CID_LEN};
pub use self::error::{Error, Result};
pub use self::multihash::{Multihash, SHA2_256_CODE, SHA2_256_LEN, encode_v0};
pub use self::normalize::{IPFS_SCHEME, NormalizedInput, normalize};

mod cid;
mod error;
mod multihash;
mod normalize;

//! Type introspection over a translation unit.
//!
//! Wraps the raw records of a [`cx_ir::TranslationUnit`] in handle values:
//!
//! - [`Type`]: one type record, with canonicalization, qualifier queries and
//!   decomposition into pointees, elements, results and parameters
//! - [`TypeKind`]: the closed set of type kinds
//! - [`ArgumentsList`]: lazy view over a function type's parameters
//! - [`Cursor`]: one AST node, the bridge from declarations to their types
//!
//! Handles borrow the unit, so none of them can outlive it. Equality is by
//! identity; see [`handle`].
//!
//! ```text
//! let unit = builder.finish();
//! let field = Cursor::root(&unit).child("teststruct")?.child("a")?;
//! assert_eq!(field.ty().kind(), TypeKind::Int);
//! ```

mod args;
mod cursor;
mod error;
pub mod handle;
mod kind;
mod ty;

use std::sync::Once;

pub use args::{ArgumentKey, ArgumentTypes, ArgumentsList};
pub use cursor::{declaration_of, type_of, Cursor};
pub use error::{TypeError, TypeResult};
pub use handle::{identity_equal, wrap, wrap_cursor, Handle};
pub use kind::TypeKind;
pub use ty::Type;

pub use cx_ir::{CursorKind, Qualifiers, RawCursor, RawType, TranslationUnit};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for type queries.
///
/// Installs a fmt subscriber filtered by `RUST_LOG`. Does nothing when
/// `RUST_LOG` is unset, and only runs once per process.
///
/// ```bash
/// RUST_LOG=cx_types=debug cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

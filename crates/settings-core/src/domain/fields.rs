//! Field descriptors and the selective merge routine.
//!
//! The store never replaces its live settings record.  When a file has been
//! read, the freshly deserialized record is *merged* into the live one field by
//! field, so anything holding on to the live record keeps seeing the same
//! object with new contents.
//!
//! # Which fields are copied?
//!
//! Each settings type lists its fields once, in a `FieldSet` implementation.
//! Every entry records the visibility of the field's read side (getter) and
//! write side (setter).  A field is *eligible* for copying only when **both**
//! sides are `Visibility::Public`:
//!
//! | getter      | setter      | copied? |
//! |-------------|-------------|---------|
//! | `Public`    | `Public`    | yes     |
//! | `Public`    | `Crate`     | no      |
//! | `Private`   | `Public`    | no      |
//! | `Public`    | `Absent`    | no      |
//!
//! Ineligible fields are skipped silently; they keep whatever value the target
//! already had.
//!
//! # Declaring fields
//!
//! ```rust
//! use settings_core::{merge, settings_field, Field, FieldSet};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Editor {
//!     font_size: u32,
//!     theme: String,
//!     revision: u64,
//! }
//!
//! impl FieldSet for Editor {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             settings_field!(Editor, font_size),
//!             settings_field!(Editor, theme),
//!             // Readable by anyone, only writable inside the owning crate.
//!             settings_field!(Editor, revision, Public, Crate),
//!         ]
//!     }
//! }
//!
//! let loaded = Editor { font_size: 15, theme: "dark".into(), revision: 9 };
//! let mut live = Editor::default();
//! let copied = merge(&loaded, &mut live);
//!
//! assert_eq!(copied, 2);
//! assert_eq!(live.font_size, 15);
//! assert_eq!(live.revision, 0);
//! ```

use std::fmt;

use tracing::trace;

/// Visibility of one side (read or write) of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Accessible to every caller.
    Public,
    /// Accessible only inside the crate that defines the settings type.
    Crate,
    /// Accessible only to a parent module or a narrower path.
    Restricted,
    /// Accessible only inside the defining module.
    Private,
    /// The accessor does not exist (read-only or write-only field).
    Absent,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Copies one field's value from a source record into a target record.
pub type CopyFn<T> = fn(&T, &mut T);

/// Descriptor for a single field of settings type `T`.
pub struct Field<T> {
    name: &'static str,
    getter: Visibility,
    setter: Visibility,
    copy: CopyFn<T>,
}

impl<T> Field<T> {
    /// Creates a descriptor with explicit getter and setter visibility.
    pub fn new(name: &'static str, getter: Visibility, setter: Visibility, copy: CopyFn<T>) -> Self {
        Self {
            name,
            getter,
            setter,
            copy,
        }
    }

    /// Declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn getter(&self) -> Visibility {
        self.getter
    }

    pub fn setter(&self) -> Visibility {
        self.setter
    }

    /// `true` when both accessors are public.
    pub fn is_eligible(&self) -> bool {
        self.getter.is_public() && self.setter.is_public()
    }

    /// Copies this field from `source` into `target` regardless of
    /// eligibility.  [`merge`] is the eligibility-aware entry point.
    pub fn copy(&self, source: &T, target: &mut T) {
        (self.copy)(source, target);
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("getter", &self.getter)
            .field("setter", &self.setter)
            .finish_non_exhaustive()
    }
}

/// A settings type whose fields are described by a static list.
pub trait FieldSet: Sized {
    /// Every field of the type, eligible or not, in declaration order.
    fn fields() -> Vec<Field<Self>>;
}

/// Builds a [`Field`] descriptor for a named struct field.
///
/// `settings_field!(Type, name)` declares a fully public field;
/// `settings_field!(Type, name, Getter, Setter)` names the visibility of each
/// accessor using the [`Visibility`] variant names.  The field type must
/// implement `Clone`.
#[macro_export]
macro_rules! settings_field {
    ($ty:ty, $field:ident) => {
        $crate::settings_field!($ty, $field, Public, Public)
    };
    ($ty:ty, $field:ident, $getter:ident, $setter:ident) => {
        $crate::domain::fields::Field::new(
            stringify!($field),
            $crate::domain::fields::Visibility::$getter,
            $crate::domain::fields::Visibility::$setter,
            |source: &$ty, target: &mut $ty| {
                target.$field = ::std::clone::Clone::clone(&source.$field);
            },
        )
    };
}

/// Copies every eligible field of `source` into `target`, in place.
///
/// Returns the number of fields copied.  `target` is never replaced, only
/// mutated; fields with a non-public getter or setter are left untouched.
pub fn merge<T: FieldSet>(source: &T, target: &mut T) -> usize {
    let mut copied = 0;
    for field in T::fields() {
        if field.is_eligible() {
            field.copy(source, target);
            copied += 1;
        } else {
            trace!(
                field = field.name(),
                getter = ?field.getter(),
                setter = ?field.setter(),
                "skipping field with non-public accessor"
            );
        }
    }
    copied
}

/// Names of the fields [`merge`] would copy for type `T`.
pub fn eligible_field_names<T: FieldSet>() -> Vec<&'static str> {
    T::fields()
        .into_iter()
        .filter(Field::is_eligible)
        .map(|f| f.name())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Borrowed string tokens passed through the bridge.
//!
//! The bridge never owns these strings. Each wrapper carries the lifetime of
//! the call that supplied it, so a handler cannot keep one past its return
//! without making an owned copy first.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::fmt;

use crate::{Error, Result};

macro_rules! borrowed_token {
    ($(#[$meta:meta])* $name:ident, $argument:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(&'a CStr);

        impl<'a> $name<'a> {
            /// Wraps a borrowed C string without copying it.
            #[must_use]
            pub const fn new(value: &'a CStr) -> Self {
                Self(value)
            }

            /// Wraps a raw, null-terminated string supplied by the caller.
            ///
            /// # Safety
            /// `ptr` must be null or point to a valid null-terminated string
            /// that stays alive and unmodified for `'a`.
            pub unsafe fn from_ptr(ptr: *const c_char) -> Result<Self> {
                if ptr.is_null() {
                    return Err(Error::NullPointer { argument: $argument });
                }
                Ok(Self(unsafe { CStr::from_ptr(ptr) }))
            }

            /// Returns the underlying C string.
            #[must_use]
            pub const fn as_c_str(&self) -> &'a CStr {
                self.0
            }

            /// Returns the original pointer, suitable for forwarding to C.
            #[must_use]
            pub const fn as_ptr(&self) -> *const c_char {
                self.0.as_ptr()
            }

            /// Returns the bytes without the trailing nul.
            #[must_use]
            pub fn as_bytes(&self) -> &'a [u8] {
                self.0.to_bytes()
            }

            /// Borrows the contents as `&str` if they are valid UTF-8.
            pub fn to_str(&self) -> Result<&'a str> {
                Ok(self.0.to_str()?)
            }

            #[must_use]
            pub fn to_string_lossy(&self) -> Cow<'a, str> {
                self.0.to_string_lossy()
            }
        }

        impl<'a> From<&'a CStr> for $name<'a> {
            fn from(value: &'a CStr) -> Self {
                Self(value)
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.0.to_string_lossy())
                    .finish()
            }
        }

        impl fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.to_string_lossy())
            }
        }
    };
}

borrowed_token!(
    /// Opaque key naming one native view instance.
    /// Allocated by the managed runtime; the bridge only forwards it.
    ViewId,
    "view_id"
);

borrowed_token!(
    /// Kind of native view to create, interpreted only by the native layer.
    ViewType,
    "view_type"
);

borrowed_token!(
    /// Name of a UI event reported by the native layer.
    EventType,
    "event_type"
);

borrowed_token!(
    /// Serialized props, children or event data. Never parsed here.
    Payload,
    "payload"
);

//! Argument-list view over a prototyped function type.
//!
//! The view stores the function type and the parameter count, nothing else.
//! Each access reads the parameter straight from the type table, so the view
//! is cheap to build and never goes stale.

use std::iter::FusedIterator;

use crate::handle::wrap;
use crate::{Type, TypeError, TypeKind, TypeResult};

/// Ordered parameter types of a `FunctionProto` type.
///
/// The variadic tail is not a parameter: `void f(int, ...)` has length 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArgumentsList<'tu> {
    func: Type<'tu>,
    len: usize,
}

/// Dynamic index into an [`ArgumentsList`].
///
/// Host bindings hand over whatever key the caller used; only integer keys
/// can address a parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentKey<'k> {
    Index(i64),
    Name(&'k str),
}

impl From<i64> for ArgumentKey<'_> {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for ArgumentKey<'_> {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl<'k> From<&'k str> for ArgumentKey<'k> {
    fn from(name: &'k str) -> Self {
        Self::Name(name)
    }
}

impl<'tu> ArgumentsList<'tu> {
    /// Build the view, failing unless `func` is a prototyped function type.
    pub fn new(func: Type<'tu>) -> TypeResult<Self> {
        let kind = func.kind();
        let count = if kind == TypeKind::FunctionProto {
            func.translation_unit().types().param_count(func.raw())
        } else {
            None
        };
        match count {
            Some(len) => Ok(Self { func, len }),
            None => {
                tracing::debug!(operation = "argument_types", %kind, "type query rejected");
                Err(TypeError::InvalidUse {
                    operation: "argument_types",
                    kind,
                })
            }
        }
    }

    /// The function type the view was built from.
    pub fn function_type(&self) -> Type<'tu> {
        self.func
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the `index`-th parameter type.
    pub fn get(&self, index: usize) -> TypeResult<Type<'tu>> {
        let param = if index < self.len {
            self.param(index)
        } else {
            None
        };
        param.ok_or_else(|| self.out_of_bounds(i64::try_from(index).unwrap_or(i64::MAX)))
    }

    /// Get a parameter type by a dynamically typed key.
    ///
    /// Negative indices are out of bounds; they do not count from the end.
    pub fn lookup<'k>(&self, key: impl Into<ArgumentKey<'k>>) -> TypeResult<Type<'tu>> {
        match key.into() {
            ArgumentKey::Index(index) => match usize::try_from(index) {
                Ok(index) => self.get(index),
                Err(_) => Err(self.out_of_bounds(index)),
            },
            ArgumentKey::Name(name) => {
                tracing::debug!(key = name, "non-integer argument key");
                Err(TypeError::InvalidKey {
                    found: format!("string {name:?}"),
                })
            }
        }
    }

    /// Iterate the parameter types in declaration order.
    pub fn iter(&self) -> ArgumentTypes<'tu> {
        ArgumentTypes {
            list: *self,
            next: 0,
        }
    }

    fn param(&self, index: usize) -> Option<Type<'tu>> {
        let tu = self.func.translation_unit();
        tu.types()
            .param(self.func.raw(), index)
            .map(|raw| wrap(raw, tu))
    }

    fn out_of_bounds(&self, index: i64) -> TypeError {
        tracing::debug!(index, len = self.len, "argument index out of bounds");
        TypeError::OutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<'tu> IntoIterator for ArgumentsList<'tu> {
    type Item = Type<'tu>;
    type IntoIter = ArgumentTypes<'tu>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'tu> IntoIterator for &ArgumentsList<'tu> {
    type Item = Type<'tu>;
    type IntoIter = ArgumentTypes<'tu>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`ArgumentsList`].
#[derive(Clone, Debug)]
pub struct ArgumentTypes<'tu> {
    list: ArgumentsList<'tu>,
    next: usize,
}

impl<'tu> Iterator for ArgumentTypes<'tu> {
    type Item = Type<'tu>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.list.len {
            return None;
        }
        let param = self.list.param(self.next);
        self.next += 1;
        param
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArgumentTypes<'_> {}

impl FusedIterator for ArgumentTypes<'_> {}

#[cfg(test)]
mod tests;

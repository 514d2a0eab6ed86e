//! Endpoint templates and the per-call request specification.
//!
//! # Design
//! An `Endpoint<T>` is a `'static` path template such as `/company/{}`,
//! whether it needs an API key, and the type `T` its body decodes into. The
//! type travels as `PhantomData`, so the catalog names the target shape once
//! in the constant and `OdbClient::fetch` picks it up from there.
//!
//! `Endpoint::request` is where identifier checks happen: every positional
//! argument must be non-blank, otherwise the call fails with
//! `ApiError::Validation` before anything touches the network.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::error::ApiError;
use crate::query::QueryParams;

const SLOT: &str = "{}";

/// Whether an endpoint refuses to run without an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    Public,
}

/// A typed endpoint template.
pub struct Endpoint<T> {
    template: &'static str,
    auth: Auth,
    _target: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    /// An endpoint that requires an API key.
    pub const fn new(template: &'static str) -> Self {
        Self {
            template,
            auth: Auth::Required,
            _target: PhantomData,
        }
    }

    /// An endpoint callable without an API key.
    pub const fn public(template: &'static str) -> Self {
        Self {
            template,
            auth: Auth::Public,
            _target: PhantomData,
        }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn auth(&self) -> Auth {
        self.auth
    }

    /// Number of `{}` slots in the template.
    pub fn slots(&self) -> usize {
        self.template.matches(SLOT).count()
    }

    /// Check every path argument is non-blank and resolve the template.
    ///
    /// # Panics
    /// If `path_args.len()` differs from the number of slots.
    pub fn request(&self, path_args: &[&str]) -> Result<RequestSpec<T>, ApiError> {
        for arg in path_args {
            check_not_blank("id", arg)?;
        }
        Ok(RequestSpec {
            path: resolve(self.template, path_args),
            query: QueryParams::new(),
            auth: self.auth,
            _target: PhantomData,
        })
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("template", &self.template)
            .field("auth", &self.auth)
            .finish()
    }
}

/// One call's worth of request data: resolved path, query parameters, auth
/// requirement and the decode target `T`. Built per call and consumed by
/// `OdbClient::fetch`.
pub struct RequestSpec<T> {
    path: String,
    query: QueryParams,
    auth: Auth,
    _target: PhantomData<fn() -> T>,
}

impl<T> RequestSpec<T> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn requires_api_key(&self) -> bool {
        self.auth == Auth::Required
    }

    /// Add or overwrite one query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Add a query parameter that identifies what is being looked up; a
    /// blank value fails validation.
    pub fn lookup(self, key: &str, value: &str) -> Result<Self, ApiError> {
        check_not_blank(key, value)?;
        Ok(self.param(key, value))
    }

    /// Merge the fields of a typed parameter struct. Fields already present
    /// are overwritten.
    pub fn params<P: Serialize>(mut self, params: &P) -> Result<Self, ApiError> {
        self.query.extend(QueryParams::from_serialize(params)?);
        Ok(self)
    }
}

impl<T> fmt::Debug for RequestSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("auth", &self.auth)
            .finish()
    }
}

/// Replace each `{}` in `template`, in order, with the matching argument.
/// Arguments are inserted verbatim.
///
/// # Panics
/// If the number of arguments differs from the number of slots. Templates
/// are compile-time constants, so a mismatch is a bug in the caller.
pub fn resolve(template: &str, args: &[&str]) -> String {
    let slots = template.matches(SLOT).count();
    assert_eq!(
        slots,
        args.len(),
        "template `{template}` has {slots} slot(s) but {} argument(s) were given",
        args.len()
    );

    let capacity = template.len() + args.iter().map(|a| a.len()).sum::<usize>();
    let mut resolved = String::with_capacity(capacity);
    let mut pieces = template.split(SLOT);
    if let Some(head) = pieces.next() {
        resolved.push_str(head);
    }
    for (piece, arg) in pieces.zip(args) {
        resolved.push_str(arg);
        resolved.push_str(piece);
    }
    resolved
}

/// Reject empty or whitespace-only identifiers.
pub fn check_not_blank(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{name} is not specified")));
    }
    Ok(())
}

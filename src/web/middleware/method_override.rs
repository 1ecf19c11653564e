//! Method override for HTML form submissions.
//!
//! Browsers only submit forms as `GET` or `POST`. A `POST` carrying
//! `?_method=PUT` (or `PATCH` / `DELETE`) in its query string is re-dispatched
//! with that method. This must run before routing, so the layer wraps the
//! whole [`axum::Router`] rather than being added with `Router::layer`.
//!
//! ```html
//! <form action="/planets/3?_method=DELETE" method="POST">
//!   <button type="submit">Delete</button>
//! </form>
//! ```

use axum::extract::Request;
use axum::http::Method;
use tower::util::MapRequestLayer;

/// Query parameter holding the intended method.
pub const OVERRIDE_PARAM: &str = "_method";

/// Request rewrite applied by [`layer`].
pub type RewriteFn = fn(Request) -> Request;

/// Creates the method override layer.
///
/// # Example
///
/// ```rust,ignore
/// let router = web::routes::routes().with_state(state);
/// let app = method_override::layer().layer(router);
/// ```
pub fn layer() -> MapRequestLayer<RewriteFn> {
    MapRequestLayer::new(rewrite as RewriteFn)
}

/// Replaces the method of a `POST` request when the query string asks for
/// one of the overridable methods. Any other request passes through as is.
pub fn rewrite(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let Some(query) = req.uri().query() else {
        return req;
    };

    let method = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OVERRIDE_PARAM)
        .and_then(|(_, value)| overridable(&value));

    if let Some(method) = method {
        tracing::debug!(%method, path = req.uri().path(), "Overriding request method");
        *req.method_mut() = method;
    }

    req
}

fn overridable(value: &str) -> Option<Method> {
    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_post_with_override_is_rewritten() {
        let req = rewrite(request(Method::POST, "/planets/1?_method=DELETE"));
        assert_eq!(req.method(), Method::DELETE);

        let req = rewrite(request(Method::POST, "/planets/1?_method=put"));
        assert_eq!(req.method(), Method::PUT);

        let req = rewrite(request(Method::POST, "/planets/1?foo=bar&_method=PATCH"));
        assert_eq!(req.method(), Method::PATCH);
    }

    #[test]
    fn test_only_post_is_overridden() {
        let req = rewrite(request(Method::GET, "/planets/1?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn test_unknown_or_missing_override_is_ignored() {
        let req = rewrite(request(Method::POST, "/planets?_method=GET"));
        assert_eq!(req.method(), Method::POST);

        let req = rewrite(request(Method::POST, "/planets?_method=TRACE"));
        assert_eq!(req.method(), Method::POST);

        let req = rewrite(request(Method::POST, "/planets"));
        assert_eq!(req.method(), Method::POST);
    }

    #[test]
    fn test_path_and_query_are_preserved() {
        let req = rewrite(request(Method::POST, "/planets/9?_method=DELETE"));
        assert_eq!(req.uri().path(), "/planets/9");
        assert_eq!(req.uri().query(), Some("_method=DELETE"));
    }
}

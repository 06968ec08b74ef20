//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |

use http::StatusCode;
use tracing::warn;

use crate::request::Request;
use crate::response::Response;
use crate::store::PostStore;

/// Liveness probe.
///
/// Always `200 OK` with body `"ok"`. If the process can respond to HTTP at
/// all, it is alive — this handler deliberately has no dependencies.
pub async fn liveness(_req: Request, _store: PostStore) -> Response {
    Response::text("ok")
}

/// Readiness probe.
///
/// A request is only servable if the database answers, so this gates on one
/// round-trip to the store. `503` pulls the instance from rotation without
/// restarting it.
pub async fn readiness(_req: Request, store: PostStore) -> Response {
    match store.ping().await {
        Ok(()) => Response::text("ready"),
        Err(e) => {
            warn!("readiness probe failed: {e}");
            Response::status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

// ============================================================================
// DEADLINE - Carrera entre una petición y su temporizador
// ============================================================================
// El temporizador y la cancelación los pone quien llama (gloo-timers y
// AbortController en la web), así la carrera se prueba sin navegador.
// ============================================================================

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;

use crate::errors::{ClientError, Result};

/// Resuelve con `exchange` si llega antes que `deadline`. Si no, ejecuta
/// `abort` y devuelve `Timeout { seconds }`.
pub async fn with_deadline<T, F, D, A>(exchange: F, deadline: D, seconds: u32, abort: A) -> Result<T>
where
    F: Future<Output = Result<T>>,
    D: Future<Output = ()>,
    A: FnOnce(),
{
    pin_mut!(exchange, deadline);

    match select(exchange, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            abort();
            log::warn!("⏱️ [HTTP] Petición cancelada tras {}s", seconds);
            Err(ClientError::Timeout { seconds })
        }
    }
}

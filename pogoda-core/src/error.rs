use thiserror::Error;

/// Everything that can terminate a fetch attempt short of a weather record.
///
/// `Display` is the user-facing message shown for the failure; all variants
/// except `Transport` carry a fixed Russian string. Errors are terminal for
/// the attempt that produced them and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// City input was empty or whitespace-only; no request was made.
    #[error("Пожалуйста, введите название города")]
    InvalidInput,

    /// The request URL could not be constructed from the city name.
    #[error("Некорректный URL")]
    InvalidUrl,

    /// HTTP 200 arrived with an empty body.
    #[error("Нет данных")]
    NoData,

    /// HTTP 200 body did not match the expected JSON shape.
    #[error("Ошибка при обработке данных")]
    Decoding,

    /// HTTP 404.
    #[error("Город не найден")]
    CityNotFound,

    /// Any other non-200 status.
    #[error("Ошибка сервера")]
    Server,

    /// Connection, DNS, timeout or body-read failure; carries the transport
    /// diagnostic verbatim.
    #[error("{0}")]
    Transport(String),
}

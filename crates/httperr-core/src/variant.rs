//! Named error variants for the standard 4xx and 5xx status codes
//!
//! Each variant is a data-only preset (code, title, message, reference link).
//! Instantiating a variant merges caller overrides over its preset.

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{HttpError, input::ErrorInput, options::ErrorOptions};

/// Base of the reference link stored in each preset's `type`
pub const STATUS_DOCS_BASE: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status";

/// Standard HTTP error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
pub enum Variant {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UriTooLong,
    UnsupportedMediaType,
    RangeNotSatisfiable,
    ExpectationFailed,
    ImATeapot,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    TooEarly,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    NetworkAuthenticationRequired,
}

/// Code, title and default message of one variant
struct Preset {
    code: u16,
    title: &'static str,
    message: &'static str,
}

impl Variant {
    #[allow(clippy::too_many_lines)]
    const fn preset_data(self) -> Preset {
        let (code, title, message) = match self {
            Self::BadRequest => (
                400,
                "Bad Request",
                "The server cannot or will not process the request because the received syntax is invalid, nonsensical, or exceeds some limitation on what the server is willing to process.",
            ),
            Self::Unauthorized => (
                401,
                "Unauthorized",
                "The request has not been applied because it lacks valid authentication credentials for the target resource.",
            ),
            Self::Forbidden => (
                403,
                "Forbidden",
                "The server understood the request but refuses to authorize it.",
            ),
            Self::NotFound => (
                404,
                "Not Found",
                "The origin server did not find a current representation for the target resource or is not willing to disclose that one exists.",
            ),
            Self::MethodNotAllowed => (
                405,
                "Method Not Allowed",
                "The method specified in the request-line is known by the origin server but not supported by the target resource.",
            ),
            Self::NotAcceptable => (
                406,
                "Not Acceptable",
                "The target resource does not have a current representation that would be acceptable to the user agent, according to the proactive negotiation header fields received in the request, and the server is unwilling to supply a default representation.",
            ),
            Self::ProxyAuthenticationRequired => (
                407,
                "Proxy Authentication Required",
                "Is similar to 401 (Unauthorized), but the client needs to authenticate itself in order to use a proxy.",
            ),
            Self::RequestTimeout => (
                408,
                "Request Timeout",
                "The server did not receive a complete request message within the time that it was prepared to wait.",
            ),
            Self::Conflict => (
                409,
                "Conflict",
                "The request could not be completed due to a conflict with the current state of the resource.",
            ),
            Self::Gone => (
                410,
                "Gone",
                "Indicates that access to the target resource is no longer available at the origin server and that this condition is likely to be permanent.",
            ),
            Self::LengthRequired => (
                411,
                "Length Required",
                "The server refuses to accept the request without a defined Content-Length.",
            ),
            Self::PreconditionFailed => (
                412,
                "Precondition Failed",
                "Indicates that one or more preconditions given in the request header fields evaluated to false when tested on the server.",
            ),
            Self::PayloadTooLarge => (
                413,
                "Payload Too Large",
                "The server is refusing to process a request because the request payload is larger than the server is willing or able to process.",
            ),
            Self::UriTooLong => (
                414,
                "URI Too Long",
                "The server is refusing to service the request because the request-target is longer than the server is willing to interpret.",
            ),
            Self::UnsupportedMediaType => (
                415,
                "Unsupported Media Type",
                "The origin server is refusing to service the request because the payload is in a format not supported by the target resource for this method.",
            ),
            Self::RangeNotSatisfiable => (
                416,
                "Range Not Satisfiable",
                "Indicates that none of the ranges in the request's Range header field overlap the current extent of the selected resource or that the set of ranges requested has been rejected due to invalid ranges or an excessive request of small or overlapping ranges.",
            ),
            Self::ExpectationFailed => (
                417,
                "Expectation Failed",
                "The expectation given in the request's Expect header field could not be met by at least one of the inbound servers.",
            ),
            Self::ImATeapot => (
                418,
                "I'm a teapot",
                "Any attempt to brew coffee with a teapot should result in the error code 418 I'm a teapot.",
            ),
            Self::MisdirectedRequest => (
                421,
                "Misdirected Request",
                "The request was directed at a server that is not able to produce a response. This can be sent by a server that is not configured to produce responses for the combination of scheme and authority that are included in the request URI.",
            ),
            Self::UnprocessableEntity => (
                422,
                "Unprocessable Entity",
                "The server understands the content type of the request entity, and the syntax of the request entity is correct, but was unable to process the contained instructions.",
            ),
            Self::Locked => (
                423,
                "Locked",
                "The source or destination resource of a method is locked.",
            ),
            Self::FailedDependency => (
                424,
                "Failed Dependency",
                "The method could not be performed on the resource because the requested action depended on another action and that action failed.",
            ),
            Self::TooEarly => (
                425,
                "Too Early",
                "The server is unwilling to risk processing a request that might be replayed.",
            ),
            Self::UpgradeRequired => (
                426,
                "Upgrade Required",
                "The server refuses to perform the request using the current protocol but might be willing to do so after the client upgrades to a different protocol.",
            ),
            Self::PreconditionRequired => (
                428,
                "Precondition Required",
                "The origin server requires the request to be conditional.",
            ),
            Self::TooManyRequests => (
                429,
                "Too Many Requests",
                "The user has sent too many requests in a given amount of time.",
            ),
            Self::RequestHeaderFieldsTooLarge => (
                431,
                "Request Header Fields Too Large",
                "The server is unwilling to process the request because its header fields are too large.",
            ),
            Self::UnavailableForLegalReasons => (
                451,
                "Unavailable For Legal Reasons",
                "The server is denying access to the resource as a consequence of a legal demand.",
            ),
            Self::InternalServerError => (
                500,
                "Internal Server Error",
                "The server has encountered a situation it doesn't know how to handle.",
            ),
            Self::NotImplemented => (
                501,
                "Not Implemented",
                "The request method is not supported by the server and cannot be handled.",
            ),
            Self::BadGateway => (
                502,
                "Bad Gateway",
                "The server, while working as a gateway to get a response needed to handle the request, got an invalid response.",
            ),
            Self::ServiceUnavailable => (
                503,
                "Service Unavailable",
                "The server is not ready to handle the request.",
            ),
            Self::GatewayTimeout => (
                504,
                "Gateway Timeout",
                "The server is acting as a gateway and cannot get a response from the upstream server in time.",
            ),
            Self::HttpVersionNotSupported => (
                505,
                "HTTP Version Not Supported",
                "The HTTP version used in the request is not supported by the server.",
            ),
            Self::VariantAlsoNegotiates => (
                506,
                "Variant Also Negotiates",
                "The server has an internal configuration error: the chosen variant resource is configured to engage in transparent content negotiation itself, and is therefore not a proper end point in the negotiation process.",
            ),
            Self::InsufficientStorage => (
                507,
                "Insufficient Storage",
                "The method could not be performed on the resource because the server is unable to store the representation needed to successfully complete the request.",
            ),
            Self::NetworkAuthenticationRequired => (
                511,
                "Network Authentication Required",
                "The client needs to authenticate to gain network access.",
            ),
        };

        Preset { code, title, message }
    }

    /// Status code of this variant
    pub const fn code(self) -> u16 {
        self.preset_data().code
    }

    /// Short title, e.g. `"Not Found"`
    pub const fn title(self) -> &'static str {
        self.preset_data().title
    }

    /// Default message
    pub const fn message(self) -> &'static str {
        self.preset_data().message
    }

    /// Type identifier, e.g. `"NotFound"`
    pub fn ident(self) -> &'static str {
        self.into()
    }

    /// Reference link describing the status
    pub fn type_link(self) -> String {
        format!("{STATUS_DOCS_BASE}/{}", self.code())
    }

    /// Look up the variant for a status code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::iter().find(|variant| variant.code() == code)
    }

    /// Number of known variants
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// The preset options record
    pub fn preset(self) -> ErrorOptions {
        ErrorOptions::default()
            .with_status_code(self.code())
            .with_title(self.title())
            .with_message(self.message())
            .with_type(self.type_link())
    }

    /// Build this error, merging `overrides` over the preset
    ///
    /// Overrides are applied last, so a valid status code among them replaces
    /// the variant's own.
    pub fn error<I>(self, overrides: I) -> HttpError
    where
        I: IntoIterator,
        I::Item: Into<ErrorInput>,
    {
        let inputs = std::iter::once(ErrorInput::from(self.preset())).chain(overrides.into_iter().map(Into::into));
        HttpError::new(inputs)
    }

    /// Build this error from its preset alone
    pub fn default_error(self) -> HttpError {
        HttpError::from_options(self.preset())
    }
}

/// One constructor per variant, each taking caller overrides
///
/// ```
/// use httperr_core::{errors, error_inputs};
///
/// let error = errors::not_found(error_inputs!["no such user"]);
/// assert_eq!(error.status_code(), 404);
/// assert_eq!(error.title, "Not Found");
/// ```
pub mod errors {
    use super::Variant;
    use crate::{HttpError, input::ErrorInput};

    macro_rules! variant_constructors {
        ($($constructor:ident => $variant:ident),* $(,)?) => {
            $(
                #[doc = concat!("Build a [`Variant::", stringify!($variant), "`] error")]
                pub fn $constructor<I>(overrides: I) -> HttpError
                where
                    I: IntoIterator,
                    I::Item: Into<ErrorInput>,
                {
                    Variant::$variant.error(overrides)
                }
            )*
        };
    }

    variant_constructors! {
        bad_request => BadRequest,
        unauthorized => Unauthorized,
        forbidden => Forbidden,
        not_found => NotFound,
        method_not_allowed => MethodNotAllowed,
        not_acceptable => NotAcceptable,
        proxy_authentication_required => ProxyAuthenticationRequired,
        request_timeout => RequestTimeout,
        conflict => Conflict,
        gone => Gone,
        length_required => LengthRequired,
        precondition_failed => PreconditionFailed,
        payload_too_large => PayloadTooLarge,
        uri_too_long => UriTooLong,
        unsupported_media_type => UnsupportedMediaType,
        range_not_satisfiable => RangeNotSatisfiable,
        expectation_failed => ExpectationFailed,
        im_a_teapot => ImATeapot,
        misdirected_request => MisdirectedRequest,
        unprocessable_entity => UnprocessableEntity,
        locked => Locked,
        failed_dependency => FailedDependency,
        too_early => TooEarly,
        upgrade_required => UpgradeRequired,
        precondition_required => PreconditionRequired,
        too_many_requests => TooManyRequests,
        request_header_fields_too_large => RequestHeaderFieldsTooLarge,
        unavailable_for_legal_reasons => UnavailableForLegalReasons,
        internal_server_error => InternalServerError,
        not_implemented => NotImplemented,
        bad_gateway => BadGateway,
        service_unavailable => ServiceUnavailable,
        gateway_timeout => GatewayTimeout,
        http_version_not_supported => HttpVersionNotSupported,
        variant_also_negotiates => VariantAlsoNegotiates,
        insufficient_storage => InsufficientStorage,
        network_authentication_required => NetworkAuthenticationRequired,
    }
}

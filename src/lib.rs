#![forbid(unsafe_code)]

mod recognizer;
mod strmap;

pub use crate::recognizer::{
    ConfigurableRoute, Endpoint, Parameter, Params, RecognizedRoute, RecognizerError,
    RouteRecognizer,
};

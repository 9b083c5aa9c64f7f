//! Handler errors - the top of the error chain

mod handler_error;

pub use handler_error::{
    convert_usecase_error_to_handler_error, HandlerError, HandlerErrorContext, INVALID_INPUT,
};

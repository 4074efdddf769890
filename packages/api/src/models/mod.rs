mod photo;
mod profile;

pub use photo::PhotoFile;
pub use profile::{
    CreateProfilePayload, ProfileResponse, RegistrationRequest,
    REGISTRATION_REJECTED_FALLBACK, REGISTRATION_SUCCESS, UNEXPECTED_ERROR_FALLBACK,
};

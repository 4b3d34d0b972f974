//! User-facing text for error codes.
//!
//! Every domain crate renders its errors through this table so the API speaks
//! with one voice. Unknown codes get [`GENERIC_MESSAGE`].

pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

pub fn message_for(code: &str) -> &'static str {
    match code {
        "INVALID_EMAIL_FORMAT" => "The email address format is invalid.",
        "INVALID_FIRST_NAME" => {
            "The first name may only contain letters, apostrophes, hyphens and single spaces."
        }
        "INVALID_LAST_NAME" => {
            "The last name may only contain letters, apostrophes, hyphens and single spaces."
        }
        "PASSWORDS_DO_NOT_MATCH" => "The passwords do not match.",
        "INVALID_PASSWORD_FORMAT" => {
            "The password must be at least 8 characters long and contain an uppercase letter and a digit."
        }
        "EMAIL_ALREADY_EXISTS" => "This email address is already registered.",
        "EMAILS_DO_NOT_MATCH" => "The email addresses do not match.",
        "INVALID_PHONE_NUMBER" => {
            "The phone number must be 9 to 20 characters made of digits, '-' or '+'."
        }
        "INVALID_GENDER" => "Gender must be Male, Female or Other.",
        "INVALID_BIRTHDATE" => "The birthdate must be a valid date (YYYY-MM-DD).",
        "INVALID_ROLE_ID" => "The selected role is invalid.",
        "INVALID_ROLE" => "The role name is invalid.",
        "USER_NOT_ACTIVE" => "Your account is disabled. Please contact an administrator.",
        "INVALID_CREDENTIALS" => "Incorrect email or password.",
        "UNAUTHENTICATED" => "Please sign in to continue.",
        "FORBIDDEN" => "You do not have permission to perform this action.",
        "USER_NOT_FOUND" => "The user could not be found.",
        "ROLE_NOT_FOUND" => "The role could not be found.",
        "INVALID_LOCALITY" => "Please select a valid locality.",
        "ADDRESS_NOT_FOUND" => "The address could not be found.",
        "INVALID_ADDRESS" => "The address is incomplete or too long.",
        "COUNTRY_NOT_FOUND" => "The country could not be found.",
        "HALL_NOT_FOUND" => "The hall could not be found.",
        "NOT_FOUND" => "The requested item could not be found.",
        "INTERNAL_ERROR" => "An unexpected error occurred. Please try again later.",
        _ => GENERIC_MESSAGE,
    }
}

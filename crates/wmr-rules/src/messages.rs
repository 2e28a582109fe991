//! Warning message templates. Every template carries the `{{ #label }}`
//! placeholder, replaced with the bracketed field label at render time.

pub const DISPOSAL_OR_RECOVERY_CODES_REQUIRED: &str = "{{ #label }} is required";

pub const DISPOSAL_OR_RECOVERY_CODE_REQUIRED: &str =
    "{{ #label }} is required for each disposal or recovery entry";

pub const DISPOSAL_OR_RECOVERY_WEIGHT_REQUIRED: &str =
    "{{ #label }} is required for each disposal or recovery code";

pub const WEIGHT_METRIC_REQUIRED: &str = "{{ #label }} is required";

pub const WEIGHT_AMOUNT_REQUIRED: &str = "{{ #label }} is required";

pub const WEIGHT_IS_ESTIMATE_REQUIRED: &str = "{{ #label }} is required";

pub const REASON_FOR_NO_REGISTRATION_NUMBER_REQUIRED: &str =
    "{{ #label }} is required when carrier.registrationNumber is not provided";

pub const CONSIGNMENT_CODE_REQUIRED: &str =
    "{{ #label }} or reasonForNoConsignmentCode is required when a waste item has a hazardous EWC code";

pub const COMPONENTS_REQUIRED: &str =
    "{{ #label }} is required when the source of components is provided";

pub const COMPONENTS_INCOMPLETE: &str =
    "{{ #label }} must each have a name and a concentration of zero or more";

pub const POP_COMPONENTS_RECOMMENDED: &str =
    "{{ #label }} is recommended when the waste contains POPs and their source is provided";

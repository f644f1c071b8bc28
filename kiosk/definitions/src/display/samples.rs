//! The sample set generated for the Display service.

use kiosk_define::{CallingForm, SampleDescriptor};

/// Id used by samples that fetch a single kiosk.
const SAMPLE_KIOSK_ID: i64 = 1024;

/// Returns the descriptors of every Display sample, one per generated file.
///
/// ## Examples
///
/// ```
/// use kiosk_definitions::display::display_samples;
///
/// let samples = display_samples();
/// assert_eq!(samples.len(), 4);
/// assert!(samples.iter().all(|s| s.check().is_ok()));
/// ```
pub fn display_samples() -> Vec<SampleDescriptor> {
    vec![
        SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Request,
            "get_kiosk_method_sample",
            Some(SAMPLE_KIOSK_ID),
        ),
        SampleDescriptor::for_method(
            "get_kiosk",
            CallingForm::Callable,
            "get_kiosk_method_sample",
            Some(SAMPLE_KIOSK_ID),
        ),
        SampleDescriptor::for_method(
            "list_signs",
            CallingForm::Request,
            "list_signs_method_sample",
            None,
        ),
        SampleDescriptor::for_method(
            "list_signs",
            CallingForm::Callable,
            "list_signs_method_sample",
            None,
        ),
    ]
}

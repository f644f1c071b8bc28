// This code was automatically generated by kiosk-gen. Do not edit manually.
// Sample name: "GetKioskRequestGetKioskMethodSample"

// [START sample]

//      calling form: "Request"
//        region tag: "sample"
//         className: "GetKioskRequestGetKioskMethodSample"
//          valueSet: "get_kiosk_method_sample" ("Get Kiosk Method Sample")
//       description: "Get Kiosk Method Sample"
//        [id=1024]
//      apiMethod "get_kiosk" of type "RequestObjectMethod"

use std::io::Write;

use kiosk_client::prelude::*;

use crate::SampleError;

/// Get Kiosk Method Sample
pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError> {
    // [START sample_core]
    let id = 1024;
    let request = GetKioskRequest::builder().id(id).build();
    let response = client.get_kiosk(request).await?;
    writeln!(out, "Response: {}", response)?;
    // [END sample_core]
    Ok(())
}

// [END sample]

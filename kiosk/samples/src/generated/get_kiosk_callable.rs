// This code was automatically generated by kiosk-gen. Do not edit manually.
// Sample name: "GetKioskCallableCallableGetKioskMethodSample"

// [START sample]

//      calling form: "Callable"
//        region tag: "sample"
//         className: "GetKioskCallableCallableGetKioskMethodSample"
//          valueSet: "get_kiosk_method_sample" ("Get Kiosk Method Sample")
//       description: "Get Kiosk Method Sample"
//        [id=1024]
//      apiMethod "get_kiosk_callable" of type "CallableMethod"

use std::io::Write;

use kiosk_client::prelude::*;

use crate::SampleError;

/// Get Kiosk Method Sample
pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError> {
    // [START sample_core]
    let id = 1024;
    let request = GetKioskRequest::builder().id(id).build();
    let future = client.get_kiosk_callable().future_call(request);

    // Do something

    let response = future.await?;
    writeln!(out, "Response: {}", response)?;
    // [END sample_core]
    Ok(())
}

// [END sample]

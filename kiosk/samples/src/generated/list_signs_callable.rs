// This code was automatically generated by kiosk-gen. Do not edit manually.
// Sample name: "ListSignsCallableCallableListSignsMethodSample"

// [START sample]

//      calling form: "Callable"
//        region tag: "sample"
//         className: "ListSignsCallableCallableListSignsMethodSample"
//          valueSet: "list_signs_method_sample" ("List Signs Method Sample")
//       description: "List Signs Method Sample"
//        []
//      apiMethod "list_signs_callable" of type "CallableMethod"

use std::io::Write;

use kiosk_client::prelude::*;

use crate::SampleError;

/// List Signs Method Sample
pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError> {
    // [START sample_core]
    let request = Empty::default();
    let future = client.list_signs_callable().future_call(request);

    // Do something

    let response = future.await?;
    for sign in response.signs {
        writeln!(out, "Sign: {}", sign)?;
    }
    // [END sample_core]
    Ok(())
}

// [END sample]

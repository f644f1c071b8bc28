// This code was automatically generated by kiosk-gen. Do not edit manually.
// Sample name: "ListSignsRequestListSignsMethodSample"

// [START sample]

//      calling form: "Request"
//        region tag: "sample"
//         className: "ListSignsRequestListSignsMethodSample"
//          valueSet: "list_signs_method_sample" ("List Signs Method Sample")
//       description: "List Signs Method Sample"
//        []
//      apiMethod "list_signs" of type "RequestObjectMethod"

use std::io::Write;

use kiosk_client::prelude::*;

use crate::SampleError;

/// List Signs Method Sample
pub async fn run(client: &DisplayClient, out: &mut dyn Write) -> Result<(), SampleError> {
    // [START sample_core]
    let request = Empty::default();
    let response = client.list_signs(request).await?;
    for sign in response.signs {
        writeln!(out, "Sign: {}", sign)?;
    }
    // [END sample_core]
    Ok(())
}

// [END sample]

use super::*;

#[test]
fn http_handler_is_selected_by_default() {
    assert_eq!(BackendFeature::default(), BackendFeature::HttpHandler);
    assert_eq!(BackendFeature::ALL[0], BackendFeature::default());
}

#[test]
fn labels_match_tab_copy() {
    let labels: Vec<&str> = BackendFeature::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["Http Handler", "Data stores", "Scheduled jobs", "Background workers"]);
}

#[test]
fn every_feature_has_a_distinct_sample() {
    for (i, a) in BackendFeature::ALL.iter().enumerate() {
        for b in &BackendFeature::ALL[i + 1..] {
            assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a sample");
        }
    }
}

#[test]
fn samples_open_with_their_feature_attribute() {
    assert!(BackendFeature::HttpHandler.code().starts_with("[<HttpHandler(\"GET\", \"/hello\")>]"));
    assert!(BackendFeature::DataStores.code().starts_with("[<Model>]"));
    assert!(BackendFeature::ScheduledJobs.code().starts_with("[<ScheduledJob("));
    assert!(BackendFeature::BackgroundWorkers.code().starts_with("[<QueueWorker("));
}

#[test]
fn only_http_handler_has_mono_icon_and_caret() {
    for feature in BackendFeature::ALL {
        let is_http = feature == BackendFeature::HttpHandler;
        assert_eq!(feature.mono_icon(), is_http);
        assert_eq!(feature.has_dropdown(), is_http);
    }
}

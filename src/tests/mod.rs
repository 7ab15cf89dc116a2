//! Scenario tests for the command-line pipelines: JSON model files in, forecast
//! out; saved NDBC reports in, reconciled observations out.

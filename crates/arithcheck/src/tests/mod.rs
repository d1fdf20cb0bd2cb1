mod divergence;
mod snapshot_tokens;

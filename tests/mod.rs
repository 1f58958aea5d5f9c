//////////////////
// Test modules //
//////////////////

mod conversion;
mod versioning;
mod wire;

//////////////////
// Test helpers //
//////////////////

//! CLI help text shown after the generated option list.

pub const AFTER_HELP: &str = "\
A resource provider is a `Microsoft.*` directory under
specification/<service>/resource-manager. Providers without service groups
contain `stable`/`preview` directly; providers with service groups nest them
under group directories (e.g. Microsoft.Compute/ComputeRP).

Examples:
  rpscan
  rpscan --with-service-groups --format table
  rpscan --repo-root ../specs --format json
  rpscan --count
  rpscan lease --service storage --rp Microsoft.Storage --reviewer \"Jane Smith\"";

pub const LEASE_AFTER_HELP: &str = "\
Each lease is written to
.github/arm-leases/<service>/<resource-provider>/[<service-group>/]lease.yaml
and existing files are never overwritten.

Input file format, one entry per line (blank lines and # comments ignored):
  storage, Microsoft.Storage
  compute, Microsoft.Compute, [ComputeRP, DiskRP, GalleryRP]

Examples:
  rpscan lease --service storage --rp Microsoft.Storage --reviewer \"John Doe\"
  rpscan lease --service compute --rp Microsoft.Compute --sg ComputeRP,DiskRP --reviewer \"Jane Smith\"
  rpscan lease --input rps.txt --reviewer \"John Doe\" --dry-run";

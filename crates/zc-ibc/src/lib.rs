use sha2::{Digest, Sha256};

pub const IBC_PREFIX: &str = "ibc/";

/// Derives the IBC denom for a transfer path such as `transfer/channel-0/uatom`.
///
/// The result is `ibc/` followed by the uppercase hex SHA-256 of the path bytes,
/// matching the denom trace hash used by ICS-20.
pub fn ibc_hash(transfer_path: &str) -> String {
    let digest = Sha256::digest(transfer_path.as_bytes());
    format!("{IBC_PREFIX}{}", to_upper_hex(&digest))
}

fn to_upper_hex(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push_str(&format!("{byte:02X}"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_over_channel_0() {
        assert_eq!(
            ibc_hash("transfer/channel-0/uatom"),
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
    }

    #[test]
    fn nls_over_channel_109() {
        assert_eq!(
            ibc_hash("transfer/channel-109/unls"),
            "ibc/5E7589614F0B4B80D91923D15D8EB0972AAA6226F7566921F1D6A07EA0DB0D2C"
        );
    }

    #[test]
    fn hash_is_deterministic() {
        let path = "transfer/channel-208/transfer/channel-2/uusdc";
        assert_eq!(ibc_hash(path), ibc_hash(path));
        assert_ne!(ibc_hash(path), ibc_hash("transfer/channel-208/uusdc"));
    }
}

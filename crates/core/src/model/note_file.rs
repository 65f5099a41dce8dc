/// File kinds the server knows how to extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Pdf,
    Docx,
    Txt,
}

impl NoteKind {
    /// Kind derived from the file extension, case-insensitive.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            NoteKind::Pdf => "application/pdf",
            NoteKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            NoteKind::Txt => "text/plain",
        }
    }
}

/// A note file picked by the user, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl NoteFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn kind(&self) -> Option<NoteKind> {
        NoteKind::from_file_name(&self.file_name)
    }

    /// MIME type for the multipart part; unknown kinds go out as octet-stream.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.kind().map_or("application/octet-stream", NoteKind::mime)
    }
}

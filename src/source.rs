use std::fs;
use std::io;
use std::rc::Rc;

pub type Source = Rc<SourceImpl>;

pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub fn file(path: &str) -> io::Result<Source> {
    let content = fs::read_to_string(path)?;
    Ok(Rc::new(SourceImpl {
        name: String::from(path),
        content,
    }))
}

pub fn text(text: &str) -> Source {
    Rc::new(SourceImpl {
        name: String::from("<text>"),
        content: String::from(text),
    })
}

impl SourceImpl {
    /// Length of the source in bytes.
    pub fn length(&self) -> usize {
        self.content.len()
    }

    /// The unconsumed tail of the source starting at `index`.
    pub fn suffix(&self, index: usize) -> &str {
        &self.content[index..]
    }
}

// Table File
//
// One flat file per table: a schema line followed by zero or more record
// lines. Every operation opens the file, reads or writes it completely and
// closes it again; nothing is cached between calls.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::catalog::Column;
use crate::storage::codec::{decode_record_line, decode_schema_line, encode_record_line, encode_schema_line};
use crate::storage::error::{StorageError, StorageResult};

/// Full in-memory copy of a table file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableContents {
    /// Decoded schema line
    pub schema: Vec<Column>,
    /// Decoded record lines, in file order
    pub records: Vec<Vec<String>>,
}

/// Handle to the file backing one table
#[derive(Debug, Clone)]
pub struct TableFile {
    name: String,
    path: PathBuf,
}

impl TableFile {
    /// Handle for table `name` inside a database directory
    pub fn new(database_dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = database_dir.as_ref().join(&name);
        TableFile { name, path }
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file is present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the file holding only a schema line.
    ///
    /// Fails if the file already exists. If writing the schema fails the
    /// new file is removed again so no partial table is left behind.
    pub fn create(&self, schema: &[Column]) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => StorageError::TableFileExists(self.path.clone()),
                _ => StorageError::from_io(&self.path, e),
            })?;

        let line = encode_schema_line(schema);
        let written = writeln!(file, "{}", line).and_then(|_| file.flush());
        drop(file);
        if let Err(e) = written {
            if let Err(remove_err) = fs::remove_file(&self.path) {
                warn!("Failed to roll back table file {}: {}", self.path.display(), remove_err);
            }
            return Err(StorageError::from_io(&self.path, e));
        }

        debug!("Created table file {} with {} columns", self.path.display(), schema.len());
        Ok(())
    }

    /// Read only the schema line
    pub fn read_schema(&self) -> StorageResult<Vec<Column>> {
        let mut lines = self.open_lines()?;
        let schema_line = match lines.next() {
            Some(line) => line.map_err(|e| StorageError::from_io(&self.path, e))?,
            None => return Err(StorageError::MissingSchema(self.path.clone())),
        };
        decode_schema_line(&schema_line)
    }

    /// Read the schema line and every record line.
    ///
    /// Blank lines are skipped; every read is checked, so a failed read ends
    /// the operation instead of repeating the last line.
    pub fn read(&self) -> StorageResult<TableContents> {
        let mut lines = self.open_lines()?;
        let schema_line = match lines.next() {
            Some(line) => line.map_err(|e| StorageError::from_io(&self.path, e))?,
            None => return Err(StorageError::MissingSchema(self.path.clone())),
        };
        let schema = decode_schema_line(&schema_line)?;

        let mut records = Vec::new();
        for line in lines {
            let line = line.map_err(|e| StorageError::from_io(&self.path, e))?;
            if line.is_empty() {
                continue;
            }
            records.push(decode_record_line(&line));
        }

        debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(TableContents { schema, records })
    }

    /// Append one record line to an existing file
    pub fn append_record<S: AsRef<str>>(&self, values: &[S]) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StorageError::from_io(&self.path, e))?;

        writeln!(file, "{}", encode_record_line(values))
            .and_then(|_| file.flush())
            .map_err(|e| StorageError::from_io(&self.path, e))?;

        debug!("Appended record with {} fields to {}", values.len(), self.path.display());
        Ok(())
    }

    /// Replace the whole file with new contents.
    ///
    /// The contents are written to a sibling temporary file which is then
    /// renamed over the original, so the original is never read and written
    /// at the same time.
    pub fn rewrite(&self, contents: &TableContents) -> StorageResult<()> {
        if !self.exists() {
            return Err(StorageError::TableFileMissing(self.path.clone()));
        }

        let tmp_path = self.temp_path();
        if let Err(e) = self.write_all_to(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::from_io(&self.path, e)
        })?;

        debug!(
            "Rewrote {} with {} columns and {} records",
            self.path.display(),
            contents.schema.len(),
            contents.records.len()
        );
        Ok(())
    }

    /// Delete the backing file
    pub fn remove(&self) -> StorageResult<()> {
        fs::remove_file(&self.path).map_err(|e| StorageError::from_io(&self.path, e))?;
        debug!("Removed table file {}", self.path.display());
        Ok(())
    }

    fn open_lines(&self) -> StorageResult<std::io::Lines<BufReader<File>>> {
        let file = File::open(&self.path).map_err(|e| StorageError::from_io(&self.path, e))?;
        Ok(BufReader::new(file).lines())
    }

    fn write_all_to(&self, path: &Path, contents: &TableContents) -> StorageResult<()> {
        let file = File::create(path).map_err(|e| StorageError::from_io(path, e))?;
        let mut writer = BufWriter::new(file);

        let write = |writer: &mut BufWriter<File>| -> std::io::Result<()> {
            writeln!(writer, "{}", encode_schema_line(&contents.schema))?;
            for record in &contents.records {
                writeln!(writer, "{}", encode_record_line(record))?;
            }
            writer.flush()?;
            writer.get_ref().sync_all()
        };
        write(&mut writer).map_err(|e| StorageError::from_io(path, e))
    }

    /// Hidden sibling used while rewriting; catalog scans skip dot-files
    fn temp_path(&self) -> PathBuf {
        let file_name = format!(".{}.tmp", self.name);
        match self.path.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

//! Fixed `--help` texts.
//!
//! Callers compare these byte for byte, so edits here are breaking changes.

pub const LS: &str = r#"Usage: ls [OPTION]... [FILE]...
List information about the FILEs (the current directory by default).
Sort entries alphabetically if none of -cftuvSUX nor --sort is specified.

Mandatory arguments to long options are mandatory for short options too.
  -a, --all                  do not ignore entries starting with .
  -A, --almost-all           do not list implied . and ..
      --author               with -l, print the author of each file
  -b, --escape               print C-style escapes for nongraphic characters
      --block-size=SIZE      with -l, scale sizes by SIZE when printing them;
                             e.g., '--block-size=M'; see SIZE format below

  -B, --ignore-backups       do not list implied entries ending with ~
  -c                         with -lt: sort by, and show, ctime (time of last
                             change of file status information);
                             with -l: show ctime and sort by name;
                             otherwise: sort by ctime, newest first

  -C                         list entries by columns
      --color[=WHEN]         color the output WHEN; more info below
  -d, --directory            list directories themselves, not their contents
  -D, --dired                generate output designed for Emacs' dired mode
  -f                         list all entries in directory order
  -F, --classify[=WHEN]      append indicator (one of */=>@|) to entries WHEN
      --file-type            likewise, except do not append '*'
      --format=WORD          across -x, commas -m, horizontal -x, long -l,
                             single-column -1, verbose -l, vertical -C

      --full-time            like -l --time-style=full-iso
  -g                         like -l, but do not list owner
      --group-directories-first
                             group directories before files;
                             can be augmented with a --sort option, but any
                             use of --sort=none (-U) disables grouping

  -G, --no-group             in a long listing, don't print group names
  -h, --human-readable       with -l and -s, print sizes like 1K 234M 2G etc.
      --si                   likewise, but use powers of 1000 not 1024
  -H, --dereference-command-line
                             follow symbolic links listed on the command line
      --dereference-command-line-symlink-to-dir
                             follow each command line symbolic link
                             that points to a directory

      --hide=PATTERN         do not list implied entries matching shell PATTERN
                             (overridden by -a or -A)

      --hyperlink[=WHEN]     hyperlink file names WHEN
      --indicator-style=WORD
                             append indicator with style WORD to entry names:
                             none (default), slash (-p),
                             file-type (--file-type), classify (-F)

  -i, --inode                print the index number of each file
  -I, --ignore=PATTERN       do not list implied entries matching shell PATTERN
  -k, --kibibytes            default to 1024-byte blocks for file system usage;
                             used only with -s and per directory totals

  -l                         use a long listing format
  -L, --dereference          when showing file information for a symbolic
                             link, show information for the file the link
                             references rather than for the link itself

  -m                         fill width with a comma separated list of entries
  -n, --numeric-uid-gid      like -l, but list numeric user and group IDs
  -N, --literal              print entry names without quoting
  -o                         like -l, but do not list group information
  -p, --indicator-style=slash
                             append / indicator to directories
  -q, --hide-control-chars   print ? instead of nongraphic characters
      --show-control-chars   show nongraphic characters as-is (the default,
                             unless program is 'ls' and output is a terminal)

  -Q, --quote-name           enclose entry names in double quotes
      --quoting-style=WORD   use quoting style WORD for entry names:
                             literal, locale, shell, shell-always,
                             shell-escape, shell-escape-always, c, escape
                             (overrides QUOTING_STYLE environment variable)

  -r, --reverse              reverse order while sorting
  -R, --recursive            list subdirectories recursively
  -s, --size                 print the allocated size of each file, in blocks
  -S                         sort by file size, largest first
      --sort=WORD            sort by WORD instead of name: none (-U), size (-S),
                             time (-t), version (-v), extension (-X), width

      --time=WORD            select which timestamp used to display or sort;
                               access time (-u): atime, access, use;
                               metadata change time (-c): ctime, status;
                               modified time (default): mtime, modification;
                               birth time: birth, creation;
                             with -l, WORD determines which time to show;
                             with --sort=time, sort by WORD (newest first)

      --time-style=TIME_STYLE
                             time/date format with -l; see TIME_STYLE below
  -t                         sort by time, newest first; see --time
  -T, --tabsize=COLS         assume tab stops at each COLS instead of 8
  -u                         with -lt: sort by, and show, access time;
                             with -l: show access time and sort by name;
                             otherwise: sort by access time, newest first

  -U                         do not sort; list entries in directory order
  -v                         natural sort of (version) numbers within text
  -w, --width=COLS           set output width to COLS.  0 means no limit
  -x                         list entries by lines instead of by columns
  -X                         sort alphabetically by entry extension
  -Z, --context              print any security context of each file
      --zero                 end each output line with NUL, not newline
  -1                         list one file per line"#;

pub const CD: &str = r#"Usage: cd [DIRECTORY]
Change the current directory to DIRECTORY.

Arguments:
  DIRECTORY    The directory to change to. If not specified, changes to home directory.

Examples:
  cd /home/user/Documents    Change to Documents directory
  cd ..                      Go up one directory level
  cd ~                       Go to home directory
  cd                         Go to home directory"#;

pub const PWD: &str = r#"Usage: pwd
Print the name of the current working directory.

This command displays the full path of the current directory.

Examples:
  pwd                        Print current directory"#;

pub const CAT: &str = r#"Usage: cat [OPTION]... [FILE]...
Concatenate FILE(s) to standard output.

With no FILE, or when FILE is -, read standard input.

  -A, --show-all           equivalent to -vET
  -b, --number-nonblank    number nonempty output lines, overrides -n
  -e                       equivalent to -vE
  -E, --show-ends          display $ at end of each line
  -n, --number             number all output lines
  -s, --squeeze-blank      suppress repeated empty output lines
  -t                       equivalent to -vT
  -T, --show-tabs          display TAB characters as ^I
  -u                       (ignored)
  -v, --show-nonprinting   use ^ and M- notation, except for LFD and TAB
      --help        display this help and exit
      --version     output version information and exit

Examples:
  cat f - g  Output f's contents, then standard input, then g's contents.
  cat        Copy standard input to standard output."#;

pub const LESS: &str = r#"                   SUMMARY OF LESS COMMANDS

      Commands marked with * may be preceded by a number, N.
      Notes in parentheses indicate the behavior if N is given.
      A key preceded by a caret indicates the Ctrl key; thus ^K is ctrl-K.

  h  H                 Display this help.
  q  :q  Q  :Q  ZZ     Exit.
 ---------------------------------------------------------------------------

                           MOVING

  e  ^E  j  ^N  CR  *  Forward  one line   (or N lines).
  y  ^Y  k  ^K  ^P  *  Backward one line   (or N lines).
  f  ^F  ^V  SPACE  *  Forward  one window (or N lines).
  b  ^B  ESC-v      *  Backward one window (or N lines).
  z                 *  Forward  one window (and set window to N).
  w                 *  Backward one window (and set window to N).
  ESC-SPACE         *  Forward  one window, but don't stop at end-of-file.
  d  ^D             *  Forward  one half-window (and set half-window to N).
  u  ^U             *  Backward one half-window (and set half-window to N).
  ESC-)  RightArrow *  Right one half screen width (or N positions).
  ESC-(  LeftArrow  *  Left  one half screen width (or N positions).
  ESC-}  ^RightArrow   Right to last column displayed.
  ESC-{  ^LeftArrow    Left  to first column.
  F                    Forward forever; like "tail -f".
  ESC-F                Like F but stop when search pattern is found.
  r  ^R  ^L            Repaint screen.
  R                    Repaint screen, discarding buffered input.
        ---------------------------------------------------
        Default "window" is the screen height.
        Default "half-window" is half of the screen height.
 ---------------------------------------------------------------------------

                          SEARCHING

  /pattern          *  Search forward for (N-th) matching line.
  ?pattern          *  Search backward for (N-th) matching line.
  n                 *  Repeat previous search (for N-th occurrence).
  N                 *  Repeat previous search in reverse direction.
  ESC-n             *  Repeat previous search, spanning files.
  ESC-N             *  Repeat previous search, reverse dir. & spanning files.
  ESC-u                Undo (toggle) search highlighting.
  ESC-U                Clear search highlighting.
  &pattern          *  Display only matching lines.
        ---------------------------------------------------
        A search pattern may begin with one or more of:
        ^N or !  Search for NON-matching lines.
        ^E or *  Search multiple files (pass thru END OF FILE).
        ^F or @  Start search at FIRST file (for /) or last file (for ?).
        ^K       Highlight matches, but don't move (KEEP position).
        ^R       Don't use REGULAR EXPRESSIONS.
        ^W       WRAP search if no match found.
 ---------------------------------------------------------------------------

                           JUMPING

  g  <  ESC-<       *  Go to first line in file (or line N).
  G  >  ESC->       *  Go to last line in file (or line N).
  p  %              *  Go to beginning of file (or N percent into file).
  t                 *  Go to the (N-th) next tag.
  T                 *  Go to the (N-th) previous tag.
  {  (  [           *  Find close bracket } ) ].
  }  )  ]           *  Find open bracket { ( [.
  ESC-^F <c1> <c2>  *  Find close bracket <c2>.
  ESC-^B <c1> <c2>  *  Find open bracket <c1>.
        ---------------------------------------------------
        Each "find close bracket" command goes forward to the close bracket
          matching the (N-th) open bracket in the top line.
        Each "find open bracket" command goes backward to the open bracket
          matching the (N-th) close bracket in the bottom line.

  m<letter>            Mark the current top line with <letter>.
  M<letter>            Mark the current bottom line with <letter>.
  '<letter>            Go to a previously marked position.
  ''                   Go to the previous position.
  ^X^X                 Same as '.
  ESC-M<letter>        Clear a mark.
        ---------------------------------------------------
        A mark is any upper-case or lower-case letter.
        Certain marks are predefined:
             ^  means  beginning of the file
             $  means  end of the file
 ---------------------------------------------------------------------------

                        CHANGING FILES

  :e [file]            Examine a new file.
  ^X^V                 Same as :e.
  :n                *  Examine the (N-th) next file from the command line.
  :p                *  Examine the (N-th) previous file from the command line.
  :x                *  Examine the first (or N-th) file from the command line.
  :d                   Delete the current file from the command line list.
  =  ^G  :f            Print current file name.
 ---------------------------------------------------------------------------

                    MISCELLANEOUS COMMANDS

  -<flag>              Toggle a command line option [see OPTIONS below].
  --<name>             Toggle a command line option, by name.
  _<flag>              Display the setting of a command line option.
  __<name>             Display the setting of an option, by name.
  +cmd                 Execute the less cmd each time a new file is examined.

  !command             Execute the shell command with $SHELL.
  |Xcommand            Pipe file between current pos & mark X to shell command.
  s file               Save input to a file.
  v                    Edit the current file with $VISUAL or $EDITOR.
  V                    Print version number of "less".
 ---------------------------------------------------------------------------

                           OPTIONS

        Most options may be changed either on the command line,
        or from within less by using the - or -- command.
        Options may be given in one of two forms: either a single
        character preceded by a -, or a name preceded by --.

  -?  ........  --help
                  Display help (from command line).
  -a  ........  --search-skip-screen
                  Search skips current screen.
  -A  ........  --SEARCH-SKIP-SCREEN
                  Search starts just after target line.
  -b [N]  ....  --buffers=[N]
                  Number of buffers.
  -B  ........  --auto-buffers
                  Don't automatically allocate buffers for pipes.
  -c  ........  --clear-screen
                  Repaint by clearing rather than scrolling.
  -d  ........  --dumb
                  Dumb terminal.
  -D xcolor  .  --color=xcolor
                  Set screen colors.
  -e  -E  ....  --quit-at-eof  --QUIT-AT-EOF
                  Quit at end of file.
  -f  ........  --force
                  Force open non-regular files.
  -F  ........  --quit-if-one-screen
                  Quit if entire file fits on first screen.
  -g  ........  --hilite-search
                  Highlight only last match for searches.
  -G  ........  --HILITE-SEARCH
                  Don't highlight any matches for searches.
  -h [N]  ....  --max-back-scroll=[N]
                  Backward scroll limit.
  -i  ........  --ignore-case
                  Ignore case in searches that do not contain uppercase.
  -I  ........  --IGNORE-CASE
                  Ignore case in all searches.
  -j [N]  ....  --jump-target=[N]
                  Screen position of target lines.
  -J  ........  --status-column
                  Display a status column at left edge of screen.
  -k [file]  .  --lesskey-file=[file]
                  Use a lesskey file.
  -K  ........  --quit-on-intr
                  Exit less in response to ctrl-C.
  -L  ........  --no-lessopen
                  Ignore the LESSOPEN environment variable.
  -m  -M  ....  --long-prompt  --LONG-PROMPT
                  Set prompt style.
  -n  -N  ....  --line-numbers  --LINE-NUMBERS
                  Don't use line numbers.
  -o [file]  .  --log-file=[file]
                  Copy to log file (standard input only).
  -O [file]  .  --LOG-FILE=[file]
                  Copy to log file (unconditionally overwrite).
  -p [pattern]  --pattern=[pattern]
                 Start at pattern (from command line).
  -P [prompt]   --prompt=[prompt]
                  Define new prompt.
  -q  -Q  ....  --quiet  --QUIET  --silent --SILENT
                  Quiet the terminal bell.
  -r  -R  ....  --raw-control-chars  --RAW-CONTROL-CHARS
                  Output "raw" control characters.
  -s  ........  --squeeze-blank-lines
                  Squeeze multiple blank lines.
  -S  ........  --chop-long-lines
                  Chop (truncate) long lines rather than wrapping.
  -t [tag]  ..  --tag=[tag]
                  Find a tag.
  -T [tagsfile] --tag-file=[tagsfile]
                  Use an alternate tags file.
  -u  -U  ....  --underline-special  --UNDERLINE-SPECIAL
                  Change handling of backspaces.
  -V  ........  --version
                  Display the version number of "less".
  -w  ........  --hilite-unread
                  Highlight first new line after forward-screen.
  -W  ........  --HILITE-UNREAD
                  Highlight first new line after any forward movement.
  -x [N[,...]]  --tabs=[N[,...]]
                  Set tab stops.
  -X  ........  --no-init
                  Don't use termcap init/deinit strings.
  -y [N]  ....  --max-forw-scroll=[N]
                  Forward scroll limit.
  -z [N]  ....  --window=[N]
                  Set size of window.
  -" [c[c]]  .  --quotes=[c[c]]
                  Set shell quote characters.
  -~  ........  --tilde
                  Don't display tildes after end of file.
  -# [N]  ....  --shift=[N]
                  Set horizontal scroll amount (0 = one half screen width).
                --file-size
                  Automatically determine the size of the input file.
                --follow-name
                  The F command changes files if the input file is renamed.
                --incsearch
                  Search file as each pattern character is typed in.
                --line-num-width=N
                  Set the width of the -N line number field to N characters.
                --mouse
                  Enable mouse input.
                --no-keypad
                  Don't send termcap keypad init/deinit strings.
                --no-histdups
                  Remove duplicates from command history.
                --rscroll=C
                  Set the character used to mark truncated lines.
                --save-marks
                  Retain marks across invocations of less.
                --status-col-width=N
                  Set the width of the -J status column to N characters.
                --use-backslash
                  Subsequent options use backslash as escape char.
                --use-color
                  Enables colored text.
                --wheel-lines=N
                  Each click of the mouse wheel moves N lines.


 ---------------------------------------------------------------------------

                          LINE EDITING

        These keys can be used to edit text being entered
        on the "command line" at the bottom of the screen.

 RightArrow ..................... ESC-l ... Move cursor right one character.
 LeftArrow ...................... ESC-h ... Move cursor left one character.
 ctrl-RightArrow  ESC-RightArrow  ESC-w ... Move cursor right one word.
 ctrl-LeftArrow   ESC-LeftArrow   ESC-b ... Move cursor left one word.
 HOME ........................... ESC-0 ... Move cursor to start of line.
 END ............................ ESC-$ ... Move cursor to end of line.
 BACKSPACE ................................ Delete char to left of cursor.
 DELETE ......................... ESC-x ... Delete char under cursor.
 ctrl-BACKSPACE   ESC-BACKSPACE ........... Delete word to left of cursor.
 ctrl-DELETE .... ESC-DELETE .... ESC-X ... Delete word under cursor.
 ctrl-U ......... ESC (MS-DOS only) ....... Delete entire line.
 UpArrow ........................ ESC-k ... Retrieve previous command line.
 DownArrow ...................... ESC-j ... Retrieve next command line.
 TAB ...................................... Complete filename & cycle.
 SHIFT-TAB ...................... ESC-TAB   Complete filename & reverse cycle.
 ctrl-L ................................... Complete filename, list all."#;

pub const MKDIR: &str = r#"Usage: mkdir [OPTION]... DIRECTORY...
Create directories.

Arguments:
  DIRECTORY    The directory name(s) to create

Examples:
  mkdir newdir               Create a new directory
  mkdir dir1 dir2 dir3       Create multiple directories"#;

pub const TOUCH: &str = r#"Usage: touch [OPTION]... FILE...
Create empty files or update file timestamps.

Arguments:
  FILE    The file name(s) to create or update

Examples:
  touch newfile.txt          Create an empty file
  touch file1.txt file2.txt  Create multiple files"#;

pub const RM: &str = r#"Usage: rm [OPTION]... FILE...
Remove files or directories.

Arguments:
  FILE    The file(s) to remove

Examples:
  rm file.txt                Remove a file
  rm file1.txt file2.txt     Remove multiple files

Note: This command only removes files, not directories. Use rmdir for directories."#;

pub const RMDIR: &str = r#"Usage: rmdir [OPTION]... DIRECTORY...
Remove empty directories.

Arguments:
  DIRECTORY    The directory name(s) to remove

Examples:
  rmdir emptydir             Remove an empty directory
  rmdir dir1 dir2 dir3       Remove multiple empty directories

Note: Directories must be empty to be removed."#;

pub const CP: &str = r#"Usage: cp [OPTION]... SOURCE DEST
Copy files and directories.

Arguments:
  SOURCE    The source file or directory
  DEST      The destination file or directory

Examples:
  cp file.txt copy.txt       Copy file to new name
  cp file.txt /path/to/dir/  Copy file to directory"#;

pub const MV: &str = r#"Usage: mv [OPTION]... SOURCE DEST
Move or rename files and directories.

Arguments:
  SOURCE    The source file or directory
  DEST      The destination file or directory

Examples:
  mv oldname.txt newname.txt Rename a file
  mv file.txt /path/to/dir/  Move file to directory"#;

pub const ECHO: &str = r#"Usage: echo [OPTION]... [STRING]...
Display a line of text.

Arguments:
  STRING    The text to display

Examples:
  echo Hello World           Display "Hello World"
  echo "Hello World"         Display "Hello World" (with quotes)
  echo $HOME                 Display the value of HOME variable"#;

pub const GREP: &str = r#"Usage: grep [OPTION]... PATTERN [FILE]...
Search for patterns in files.

Arguments:
  PATTERN    The text pattern to search for
  FILE       The file(s) to search in

Examples:
  grep "hello" file.txt      Search for "hello" in file.txt
  grep "error" *.log         Search for "error" in all .log files"#;

pub const FIND: &str = r#"Usage: find [PATH] [PATTERN]
Find files and directories.

Arguments:
  PATH      The directory to search in
  PATTERN   The pattern to match file names

Examples:
  find . "*.txt"             Find all .txt files in current directory
  find /home "file*"         Find files starting with "file" in /home"#;

pub const HEAD: &str = r#"Usage: head [OPTION]... [FILE]...
Display the first lines of files.

Arguments:
  FILE    The file(s) to display

Options:
  -n NUM    Display first NUM lines (default: 10)

Examples:
  head file.txt              Display first 10 lines
  head -n 5 file.txt         Display first 5 lines"#;

pub const TAIL: &str = r#"Usage: tail [OPTION]... [FILE]...
Display the last lines of files.

Arguments:
  FILE    The file(s) to display

Options:
  -n NUM    Display last NUM lines (default: 10)

Examples:
  tail file.txt              Display last 10 lines
  tail -n 5 file.txt         Display last 5 lines"#;

pub const WC: &str = r#"Usage: wc [OPTION]... [FILE]...
Count lines, words, and characters in files.

Arguments:
  FILE    The file(s) to count

Examples:
  wc file.txt                Count lines, words, characters in file.txt
  wc *.txt                   Count in all .txt files"#;

pub const SORT: &str = r#"Usage: sort [OPTION]... [FILE]...
Sort lines of text files.

Arguments:
  FILE    The file(s) to sort

Examples:
  sort file.txt              Sort lines in file.txt alphabetically
  sort file1.txt file2.txt   Sort lines from multiple files"#;

pub const UNIQ: &str = r#"Usage: uniq [OPTION]... [FILE]...
Remove duplicate lines from sorted files.

Arguments:
  FILE    The file(s) to process

Examples:
  uniq file.txt              Remove duplicate lines from file.txt
  sort file.txt | uniq       Sort and remove duplicates"#;

pub const CHMOD: &str = r#"Usage: chmod [OPTION]... MODE[,MODE]... FILE...
Change file permissions.

Arguments:
  MODE    The permission mode to set
  FILE    The file(s) to modify

Examples:
  chmod 755 file.txt         Set permissions to rwxr-xr-x
  chmod +x script.sh         Make script executable

Note: This is a simplified implementation in the simulator."#;

pub const WHOAMI: &str = r#"Usage: whoami
Print the current user name.

This command displays the username of the current user.

Examples:
  whoami                     Print current username"#;

pub const DATE: &str = r#"Usage: date [OPTION]...
Display or set the system date and time.

Examples:
  date                       Display current date and time
  date +%Y-%m-%d             Display date in YYYY-MM-DD format"#;

pub const HISTORY: &str = r#"Usage: history
Display command history.

This command shows the list of previously executed commands.

Examples:
  history                    Display command history

Note: History functionality is not fully implemented in this simulator."#;

pub const OPTIONS: &str = r#"Usage: options [OPTION]
List all available commands in the bash terminal simulator.

Options:
  --?     List all commands with descriptions and categories
  --help  Display this help message

Examples:
  options --?     Show complete list of all commands
  options --help  Show this help message
  options         Show this help message

This command provides a comprehensive overview of all commands
available in the bash terminal simulator, organized by category."#;

pub const AI_EDIT: &str = r#"AI-Edit Text Editor - Nano-like Text Editor
==============================================

Usage: ai-edit [FILE]
       ai-edit --help

AI-Edit is a user-friendly text editor similar to nano, designed for
easy text editing in the bash terminal simulator.

ARGUMENTS:
  FILE    The file to edit. If the file doesn't exist, it will be created.
          If no file is specified, opens a blank file named 'untitled.txt'.

BASIC OPERATIONS:
  Opening Files:
    ai-edit filename.txt     Open existing file
    ai-edit newfile.txt      Create new file
    ai-edit /path/to/file    Open file with full path

KEYBOARD SHORTCUTS:
  File Operations:
    Ctrl+X  - Save and Exit (prompts for filename if new file)
    Ctrl+S  - Save changes (stay in editor)
    Ctrl+Z  - Exit with save prompt (asks to save or rename)
    Ctrl+O  - Open file
    Ctrl+N  - New file

  Navigation:
    Arrow Keys    - Move cursor
    Home/End      - Move to beginning/end of line
    Page Up/Down  - Move up/down by screen
    Ctrl+Home     - Move to beginning of file
    Ctrl+End      - Move to end of file

  Editing:
    Type text     - Insert characters at cursor
    Backspace     - Delete character before cursor
    Delete        - Delete character at cursor
    Enter         - Insert new line
    Tab           - Insert tab character

  Search & Replace:
    Ctrl+F  - Find text
    Ctrl+R  - Replace text
    F3      - Find next occurrence
    F4      - Find previous occurrence

  Help:
    Ctrl+H  - Show this help

SAVING FILES:
  Save and Exit (Ctrl+X):
    1. Press Ctrl+X
    2. If new file, enter filename
    3. Press Y to confirm saving
    4. Press Enter to execute

  Save Changes (Ctrl+S):
    1. Press Ctrl+S
    2. File is saved automatically
    3. Stay in editor

  Exit with Save Prompt (Ctrl+Z):
    1. Press Ctrl+Z
    2. Choose option:
       - Y: Save changes to current file
       - N: Save as new file (prompts for filename)
       - C: Cancel and return to editor

FEATURES:
  - Line numbers display
  - Status bar with cursor position
  - Modified file indicator
  - Auto-save capability
  - Search and replace functionality
  - Multiple file support
  - Syntax highlighting (basic)

EXAMPLES:
  ai-edit                     Open blank file (untitled.txt)
  ai-edit myfile.txt          Edit existing file
  ai-edit newdocument.txt     Create new file
  ai-edit --help              Show this help

NOTES:
  - This is a simulated editor interface for the terminal simulator
  - In a real terminal, the editor would be fully interactive
  - All keyboard shortcuts are displayed in the editor interface
  - Files are automatically saved to the simulator's filesystem

For more information about text editing, see the editor interface
when you run 'ai-edit filename'."#;

pub const CLEAR: &str = r#"Usage: clear
Clear the terminal screen.

This command clears the terminal display.

Examples:
  clear                      Clear the screen"#;

pub const PING: &str = r#"Usage: ping [OPTION]... HOST
Send ICMP ECHO_REQUEST packets to network hosts.

OPTIONS:
  -c COUNT   stop after sending COUNT packets
  -W SECONDS timeout in seconds to wait for a reply
  --help     display this help and exit

DESCRIPTION:
  ping uses the ICMP protocol's mandatory ECHO_REQUEST datagram to elicit
  an ICMP ECHO_RESPONSE from a host or gateway.

  HOST may be a hostname or IP address.

EXAMPLES:
  ping google.com
  ping -c 4 google.com
  ping -W 5 8.8.8.8

NOTE: This command is sandboxed and only allows access to whitelisted domains."#;

pub const NSLOOKUP: &str = r#"Usage: nslookup [OPTION]... DOMAIN
Query Internet name servers interactively.

OPTIONS:
  -type=TYPE query for specific record type (A, AAAA, MX, etc.)
  --help     display this help and exit

DESCRIPTION:
  nslookup is a program to query Internet domain name servers.

  DOMAIN may be a hostname or IP address.

EXAMPLES:
  nslookup google.com
  nslookup -type=MX google.com
  nslookup 8.8.8.8

NOTE: This command is sandboxed and only allows access to whitelisted domains."#;

pub const DIG: &str = r#"Usage: dig [OPTION]... DOMAIN
DNS lookup utility.

OPTIONS:
  +type=TYPE query for specific record type (A, AAAA, MX, etc.)
  --help     display this help and exit

DESCRIPTION:
  dig (domain information groper) is a flexible tool for interrogating
  DNS name servers.

  DOMAIN may be a hostname or IP address.

EXAMPLES:
  dig google.com
  dig +type=MX google.com
  dig @8.8.8.8 google.com

NOTE: This command is sandboxed and only allows access to whitelisted domains."#;

pub const TRACEROUTE: &str = r#"Usage: traceroute [OPTION]... HOST
Print the route packets trace to network host.

OPTIONS:
  -m MAXHOPS maximum number of hops (default: 30)
  --help     display this help and exit

DESCRIPTION:
  traceroute tracks the route packets taken from an IP network on their
  way to a given host.

  HOST may be a hostname or IP address.

EXAMPLES:
  traceroute google.com
  traceroute -m 15 google.com
  traceroute 8.8.8.8

NOTE: This command is sandboxed and only allows access to whitelisted domains."#;

pub const NETSTAT: &str = r#"Usage: netstat [OPTION]...
Print network connections, routing tables, interface statistics.

OPTIONS:
  -a         show all connections (default: show connected)
  -n         show numerical addresses instead of trying to determine symbolic host names
  -t         show TCP connections
  -u         show UDP connections
  --help     display this help and exit

DESCRIPTION:
  netstat prints information about the Linux networking subsystem.

EXAMPLES:
  netstat
  netstat -a
  netstat -tuln
  netstat --help

NOTE: This command shows local network information only."#;

pub const IP: &str = r#"Usage: ip [OPTIONS] OBJECT { COMMAND | help }
Show / manipulate routing, network devices, interfaces and tunnels.

OBJECTS:
  addr       protocol address management
  link       network device configuration
  route      routing table management
  neigh      neighbour/ARP tables

COMMANDS:
  show       show information about objects
  add        add new objects
  del        delete objects
  set        change objects

EXAMPLES:
  ip addr show
  ip route show
  ip link show
  ip --help

NOTE: This command shows local network information only."#;

pub const ROUTE: &str = r#"Usage: route [OPTION]...
Show / manipulate the IP routing table.

OPTIONS:
  -n         show numerical addresses instead of trying to determine symbolic host names
  --help     display this help and exit

DESCRIPTION:
  route manipulates the kernel's IP routing tables.

EXAMPLES:
  route
  route -n
  route --help

NOTE: This command shows local routing information only."#;

pub const ARP: &str = r#"Usage: arp [OPTION]...
Manipulate the system ARP cache.

OPTIONS:
  -a         display (all) entries in current ARP table
  --help     display this help and exit

DESCRIPTION:
  arp manipulates the kernel's ARP cache in various ways.

EXAMPLES:
  arp
  arp -a
  arp --help

NOTE: This command shows local ARP table information only."#;

pub const WHOIS: &str = r#"Usage: whois [OPTION]... DOMAIN
Client for the whois directory service.

OPTIONS:
  --help     display this help and exit

DESCRIPTION:
  whois searches for an object in a RFC 3912 database.

  DOMAIN may be a hostname or IP address.

EXAMPLES:
  whois google.com
  whois 8.8.8.8
  whois --help

NOTE: This command is sandboxed and only allows access to whitelisted domains."#;

pub const IWCONFIG: &str = r#"Usage: iwconfig [INTERFACE] [OPTION]...
Configure a wireless network interface.

OPTIONS:
  --help     display this help and exit

DESCRIPTION:
  iwconfig is used to configure the parameters of a wireless network interface.

EXAMPLES:
  iwconfig
  iwconfig wlan0
  iwconfig --help

NOTE: This command shows wireless interface information only."#;

/// Output of `help`.
pub const GENERAL: &str = r#"Available commands:
ls          - List directory contents
cd          - Change directory
pwd         - Print working directory
cat         - Display file contents
less        - View file contents with paging
mkdir       - Create directory
touch       - Create file
rm          - Remove file
rmdir       - Remove directory
cp          - Copy file
mv          - Move/rename file
echo        - Display text
grep        - Search text in files
find        - Find files
head        - Display first lines of file
tail        - Display last lines of file
wc          - Count lines, words, characters
sort        - Sort lines
uniq        - Remove duplicate lines
chmod       - Change file permissions
whoami      - Display current user
date        - Display current date
history     - Display command history
help        - Show this help
options     - List all available commands
ai-edit     - Text editor (nano-like)
clear       - Clear screen

Network commands:
ping        - Send ICMP echo requests to hosts
nslookup    - Query DNS name servers
dig         - DNS lookup utility
traceroute  - Trace route to network host
netstat     - Print network connections
ip          - Show/manipulate network devices
route       - Show/manipulate routing table
arp         - Show/manipulate ARP cache
whois       - Query whois directory service
iwconfig    - Configure wireless interfaces
ifconfig    - Configure network interfaces (alias for ip)

Use 'command --help' for detailed help on any specific command."#;

pub const CAT_VERSION: &str = "cat (GNU coreutils) 8.32
Copyright (C) 2020 Free Software Foundation, Inc.
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.

Written by Torbjörn Granlund and Richard M. Stallman.";

pub const LESS_VERSION: &str = "less 551
Copyright (C) 1984-2019  Mark Nudelman

less comes with NO WARRANTY, to the extent permitted by law.
For information about the terms of redistribution,
see the file named README in the less distribution.
Homepage: http://www.greenwoodsoftware.com/less";
